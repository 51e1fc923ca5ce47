//! Normalizer behavior: canonical ordering, synonym matching, idempotence.

use okumetra_core::remarks::{Remark, normalize_remarks, remarks_to_label};

/// Output follows the canonical vocabulary order, not input order.
#[test]
fn canonical_order_wins_over_input_order() {
    assert_eq!(
        normalize_remarks("DIMS, 0.125% AT"),
        vec![Remark::Atropine0125, Remark::Dims],
    );
}

/// Synonyms map case-insensitively onto their canonical tags.
#[test]
fn synonyms_resolve_to_canonical_tags() {
    assert_eq!(
        normalize_remarks("ortho-k; atropine"),
        vec![Remark::LowDoseAtropine, Remark::OkLens],
    );
    assert_eq!(normalize_remarks("OrthoK"), vec![Remark::OkLens]);
    assert_eq!(normalize_remarks("AUTO"), vec![Remark::CycloplegicRefraction]);
}

/// Slash and semicolon separate tokens just like commas.
#[test]
fn all_three_separators_split_tokens() {
    assert_eq!(
        normalize_remarks("MR/CR"),
        vec![Remark::ManifestRefraction, Remark::CycloplegicRefraction],
    );
    assert_eq!(
        normalize_remarks("HAL; DIMS, ok"),
        vec![Remark::OkLens, Remark::Dims, Remark::Hal],
    );
}

/// Tokens matching nothing are dropped without complaint.
#[test]
fn unknown_tokens_are_dropped() {
    assert_eq!(normalize_remarks("placebo, HAL"), vec![Remark::Hal]);
    assert_eq!(normalize_remarks("placebo"), Vec::<Remark>::new());
}

/// Empty and whitespace-only input yield an empty list.
#[test]
fn empty_input_yields_empty_list() {
    assert_eq!(normalize_remarks(""), Vec::<Remark>::new());
    assert_eq!(normalize_remarks("  ,  ; / "), Vec::<Remark>::new());
}

/// Repeated mentions of the same treatment collapse to one tag.
#[test]
fn duplicates_collapse() {
    assert_eq!(
        normalize_remarks("at, AT, atropine"),
        vec![Remark::LowDoseAtropine],
    );
}

/// Normalizing the rendered form of a normalized list reproduces it.
#[test]
fn normalization_is_idempotent() {
    for raw in ["DIMS, 0.125% AT", "ok/hal;mg", "CR, manifest", "nothing here"] {
        let once = normalize_remarks(raw);
        let twice = normalize_remarks(&remarks_to_label(&once));
        assert_eq!(once, twice, "not idempotent for {raw:?}");
    }
}

/// The rendered form uses canonical labels joined by `"; "`.
#[test]
fn labels_render_canonically() {
    assert_eq!(
        remarks_to_label(&[Remark::Atropine0125, Remark::Dims]),
        "0.125% AT; DIMS",
    );
    assert_eq!(remarks_to_label(&[]), "");
    assert_eq!(Remark::LowDoseAtropine.to_string(), "low-dose AT");
}

/// Serde uses the canonical labels as the wire form.
#[test]
fn serde_uses_canonical_labels() {
    assert_eq!(
        serde_json::to_string(&Remark::Atropine0125).unwrap(),
        "\"0.125% AT\"",
    );
    let back: Remark = serde_json::from_str("\"OK-lens\"").unwrap();
    assert_eq!(back, Remark::OkLens);
}
