use ini_config::{parse_str, to_ini, IniDocument, IniSection};
use proptest::prelude::*;

#[derive(Debug, Default, PartialEq, IniSection)]
#[ini(rename_all = "PascalCase")]
struct General {
    label: Option<String>,
    count: Option<i64>,
    ratio: Option<f64>,
    enabled: Option<bool>,
    tags: Vec<String>,
}

#[derive(Debug, Default, PartialEq, IniSection)]
#[ini(rename_all = "PascalCase")]
struct Extras {
    marker: Option<char>,
    limit: Option<u32>,
    aliases: Vec<String>,
}

#[derive(Debug, Default, PartialEq, IniDocument)]
#[ini(rename_all = "PascalCase")]
struct RoundTrip {
    general: Option<General>,
    extras: Option<Extras>,
}

// Values must be non-empty with no edge whitespace: the decoder trims around '='.
fn arb_value() -> impl Strategy<Value = String> {
    r"[a-zA-Z0-9_\-]([a-zA-Z0-9 _\-]{0,14}[a-zA-Z0-9_\-])?".prop_map(|s| s)
}

prop_compose! {
    fn arb_general()(
        label in proptest::option::of(arb_value()),
        count in proptest::option::of(any::<i64>()),
        ratio in proptest::option::of(-1.0e9..1.0e9f64),
        enabled in proptest::option::of(any::<bool>()),
        tags in proptest::collection::vec(arb_value(), 0..4),
    ) -> General {
        General { label, count, ratio, enabled, tags }
    }
}

prop_compose! {
    fn arb_extras()(
        marker in proptest::option::of(proptest::char::range('!', '~')),
        limit in proptest::option::of(any::<u32>()),
        aliases in proptest::collection::vec(arb_value(), 0..4),
    ) -> Extras {
        Extras { marker, limit, aliases }
    }
}

prop_compose! {
    fn arb_round_trip()(
        general in proptest::option::of(arb_general()),
        extras in proptest::option::of(arb_extras()),
    ) -> RoundTrip {
        RoundTrip { general, extras }
    }
}

proptest! {
    #[test]
    fn roundtrip_render_parse(value in arb_round_trip()) {
        let ini = to_ini(&value);
        let parsed = parse_str::<RoundTrip>(&ini).unwrap();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn arbitrary_input_never_panics(input in r"(?s).{0,256}") {
        let _ = parse_str::<RoundTrip>(&input);
    }
}
