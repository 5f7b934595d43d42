// tests for medication text handling

use medguard::{clean_medicine_text, clean_medicines, split_medications};

#[test]
fn test_split_commas_and_newlines() {
    let meds = split_medications("aspirin, warfarin\nibuprofen");
    assert_eq!(meds, vec!["aspirin", "warfarin", "ibuprofen"]);
}

#[test]
fn test_split_drops_empty_entries() {
    let meds = split_medications(" , aspirin,,\n  \n");
    assert_eq!(meds, vec!["aspirin"]);
}

#[test]
fn test_split_keeps_duplicates() {
    let meds = split_medications("ibuprofen, ibuprofen");
    assert_eq!(meds.len(), 2);
}

#[test]
fn test_split_empty_input() {
    assert!(split_medications("").is_empty());
}

#[test]
fn test_clean_strips_dosage_and_forms() {
    let text = clean_medicine_text("Aspirin 500mg tablet, Warfarin 5 mg");
    assert_eq!(text, "Aspirin, Warfarin");
}

#[test]
fn test_clean_strips_brackets() {
    let meds = clean_medicines("Ibuprofen (200mg)\n[Naproxen]");
    assert_eq!(meds, vec!["Ibuprofen", "Naproxen"]);
}

#[test]
fn test_clean_dedupes_case_insensitively() {
    let meds = clean_medicines("ASPIRIN, aspirin\nAspirin capsule");
    assert_eq!(meds, vec!["Aspirin"]);
}

#[test]
fn test_clean_keeps_words_containing_form_words() {
    // "cap" inside a word is not a form word
    let meds = clean_medicines("captopril 25mg");
    assert_eq!(meds, vec!["Captopril"]);
}

#[test]
fn test_clean_drops_form_only_entries() {
    let meds = clean_medicines("syrup, 10 ml, codeine");
    assert_eq!(meds, vec!["Codeine"]);
}

#[test]
fn test_clean_empty() {
    assert_eq!(clean_medicine_text("  \n , "), "");
}
