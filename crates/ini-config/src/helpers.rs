/// Ordered accumulation buffer for `key[]` lines.
///
/// Values collect per key until the enclosing section ends; keys keep the
/// order of their first occurrence.
#[derive(Debug, Default)]
pub struct ListBuffer {
    entries: Vec<(String, Vec<String>)>,
}

impl ListBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: String) {
        match self.entries.iter_mut().find(|(existing, _)| existing == key) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((key.to_string(), vec![value])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Take all buffered entries, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<(String, Vec<String>)> {
        std::mem::take(&mut self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::ListBuffer;

    #[test]
    fn keeps_first_seen_key_order_and_value_order() {
        let mut buffer = ListBuffer::new();
        buffer.push("b", "1".to_string());
        buffer.push("a", "2".to_string());
        buffer.push("b", "3".to_string());

        let drained = buffer.drain();
        assert_eq!(
            drained,
            vec![
                ("b".to_string(), vec!["1".to_string(), "3".to_string()]),
                ("a".to_string(), vec!["2".to_string()]),
            ]
        );
        assert!(buffer.is_empty());
    }
}
