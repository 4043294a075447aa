use serde::{Deserialize, Serialize};

/// Request body shared by the roster and classify endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRequest {
    pub text: String,
}

/// Validates a request before it reaches the generator
pub fn validate_request(req: &RosterRequest, max_chars: usize) -> Result<(), String> {
    if req.text.trim().is_empty() {
        return Err("Input text is required".to_string());
    }

    let length = req.text.chars().count();
    if length > max_chars {
        return Err(format!(
            "Input text is too long: {} characters (limit {})",
            length, max_chars
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str) -> RosterRequest {
        RosterRequest {
            text: text.to_string(),
        }
    }

    #[test]
    fn accepts_ordinary_text() {
        assert!(validate_request(&request("Bob is available Monday"), 100).is_ok());
    }

    #[test]
    fn rejects_blank_text() {
        assert_eq!(
            validate_request(&request("  \n\t "), 100),
            Err("Input text is required".to_string())
        );
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        assert!(validate_request(&request("doctor’s"), 8).is_ok());
        let err = validate_request(&request("doctor’s!"), 8).unwrap_err();
        assert!(err.contains("9 characters"));
    }
}
