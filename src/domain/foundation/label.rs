//! Parsing of closed enumerations from their display labels.

use super::ValidationError;

/// Lower-cases and strips everything but letters and digits.
///
/// `"SPI: Physics"`, `"spi-physics"` and `"spi_physics"` all normalize to
/// `"spiphysics"`.
pub fn normalize_label(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Finds the variant whose label matches `input` after normalization.
pub fn parse_label<T: Copy>(
    field: &str,
    input: &str,
    variants: &[T],
    label: impl Fn(&T) -> &'static str,
) -> Result<T, ValidationError> {
    let wanted = normalize_label(input);
    if wanted.is_empty() {
        return Err(ValidationError::empty_field(field));
    }

    variants
        .iter()
        .find(|v| normalize_label(label(*v)) == wanted)
        .copied()
        .ok_or_else(|| {
            let expected: Vec<&str> = variants.iter().map(&label).collect();
            ValidationError::unknown_value(field, input.trim(), &expected)
        })
}
