//! Field rules shared by the input types.

/// Length limit for short text columns (`VARCHAR(255)`).
pub(crate) const SHORT_TEXT_MAX: usize = 255;

/// Collects rule violations for one payload.
#[derive(Debug, Default)]
pub(crate) struct Violations(Vec<String>);

impl Violations {
    /// Field must be present and contain something other than whitespace.
    pub fn required(&mut self, field: &str, value: Option<String>) -> Option<String> {
        match value {
            Some(v) if !v.trim().is_empty() => Some(v),
            Some(_) => {
                self.0.push(format!("{field}: não pode estar em branco"));
                None
            }
            None => {
                self.0.push(format!("{field}: é obrigatório"));
                None
            }
        }
    }

    pub fn max_chars(&mut self, field: &str, value: Option<&str>, max: usize) {
        if let Some(v) = value {
            if v.chars().count() > max {
                self.0
                    .push(format!("{field}: tamanho máximo é {max} caracteres"));
            }
        }
    }

    pub fn into_result(self) -> Result<(), Vec<String>> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.0)
        }
    }
}
