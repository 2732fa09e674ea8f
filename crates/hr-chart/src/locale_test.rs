use stellar::EvolutionPhase;

use crate::locale::Locale;

#[test]
fn parses_codes_and_names() {
    assert_eq!("en".parse::<Locale>(), Ok(Locale::English));
    assert_eq!("English".parse::<Locale>(), Ok(Locale::English));
    assert_eq!("ko".parse::<Locale>(), Ok(Locale::Korean));
    assert_eq!("KOREAN".parse::<Locale>(), Ok(Locale::Korean));
    assert!("fr".parse::<Locale>().is_err());
}

#[test]
fn display_is_language_code() {
    assert_eq!(Locale::English.to_string(), "en");
    assert_eq!(Locale::Korean.to_string(), "ko");
}

#[test]
fn mass_line_has_two_decimals() {
    let en = Locale::English.labels();
    assert_eq!(en.mass_line(1.0), "Estimated mass: 1.00 solar masses");
    assert_eq!(en.mass_line(26.826957), "Estimated mass: 26.83 solar masses");

    let ko = Locale::Korean.labels();
    assert_eq!(ko.mass_line(1.0), "추정된 질량: 1.00 태양 질량");
}

#[test]
fn phase_names() {
    let en = Locale::English.labels();
    assert_eq!(en.phase(EvolutionPhase::RedGiant), "Red giant");
    assert_eq!(en.phase(EvolutionPhase::Supernova), "Supernova");

    let ko = Locale::Korean.labels();
    assert_eq!(ko.phase(EvolutionPhase::MainSequence), "주계열성");
    assert_eq!(ko.phase(EvolutionPhase::Supergiant), "초거성");
}

#[test]
fn explanation_is_heading_and_bullets() {
    let text = Locale::English.labels().explanation_text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "### Explanation");
    assert!(lines[1..].iter().all(|l| l.starts_with("- ")));
    assert!(text.contains("8 solar masses"));
}
