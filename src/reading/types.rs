use serde::{Deserialize, Serialize};

/// Artwork for the two drawn cards, in draw order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReadingResult {
    pub card1_image: String,
    pub card2_image: String,
}

impl ReadingResult {
    /// Image for the card at `index` in draw order (0 or 1).
    pub fn image_for(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(&self.card1_image),
            1 => Some(&self.card2_image),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_camel_case() {
        let result: ReadingResult =
            serde_json::from_str(r#"{"card1Image":"a.jpg","card2Image":"b.jpg"}"#).unwrap();
        assert_eq!(result.card1_image, "a.jpg");
        assert_eq!(result.image_for(1), Some("b.jpg"));
        assert_eq!(result.image_for(2), None);
    }
}
