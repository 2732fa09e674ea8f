use crate::spectral::SpectralType;

#[test]
fn harvard_classes_from_temperature() {
    assert_eq!(SpectralType::from_temperature(40000.0), SpectralType::O);
    assert_eq!(SpectralType::from_temperature(20000.0), SpectralType::B);
    assert_eq!(SpectralType::from_temperature(8700.0), SpectralType::A);
    assert_eq!(SpectralType::from_temperature(5800.0), SpectralType::G);
    assert_eq!(SpectralType::from_temperature(4060.0), SpectralType::K);
    assert_eq!(SpectralType::from_temperature(3000.0), SpectralType::M);
    assert_eq!(SpectralType::from_temperature(1000.0), SpectralType::T);
}

#[test]
fn class_boundaries_are_inclusive_lower_bounds() {
    assert_eq!(SpectralType::from_temperature(30000.0), SpectralType::O);
    assert_eq!(SpectralType::from_temperature(29999.9), SpectralType::B);
    assert_eq!(SpectralType::from_temperature(6000.0), SpectralType::F);
}

#[test]
fn degenerate_temperatures() {
    assert_eq!(SpectralType::from_temperature(-1.0), SpectralType::Y);
    assert_eq!(SpectralType::from_temperature(f64::NAN), SpectralType::Y);
}

#[test]
fn display() {
    assert_eq!(SpectralType::G.to_string(), "G");
    assert_eq!(SpectralType::Y.to_string(), "Y");
}
