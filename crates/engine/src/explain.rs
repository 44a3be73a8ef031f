//! Human-readable justification for a recommendation.

use catalog::Restaurant;

/// One-line explanation of why a restaurant was recommended.
///
/// Example: `Matched on North Indian cuisine, low budget with 4.1★ rating`
///
/// Total over all records: missing fields are spelled out rather than
/// causing a failure.
pub fn explain(restaurant: &Restaurant) -> String {
    let cuisine = restaurant
        .primary_cuisine
        .as_deref()
        .map(title_case)
        .unwrap_or_else(|| "Unspecified".to_string());
    let budget = restaurant
        .cost_category
        .map(|c| c.as_str())
        .unwrap_or("unspecified");
    let rating = restaurant
        .rating
        .map(|r| format!("{r:.1}★"))
        .unwrap_or_else(|| "unrated".to_string());

    format!("Matched on {cuisine} cuisine, {budget} budget with {rating} rating")
}

/// Capitalise the first letter of every alphabetic run, lowercase the rest.
///
/// Example: `"north INDIAN"` -> `"North Indian"`, `"tex-mex"` -> `"Tex-Mex"`
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::CostCategory;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("north INDIAN"), "North Indian");
        assert_eq!(title_case("tex-mex"), "Tex-Mex");
        assert_eq!(title_case("café"), "Café");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_explain_full_record() {
        let restaurant = Restaurant::new("Karim's", "Delhi")
            .with_cuisine("mughlai")
            .with_cost_category(CostCategory::Medium)
            .with_cost(800.0)
            .with_rating(4.0);

        assert_eq!(
            explain(&restaurant),
            "Matched on Mughlai cuisine, medium budget with 4.0★ rating"
        );
    }

    #[test]
    fn test_explain_missing_fields() {
        let restaurant = Restaurant::new("Mystery", "Delhi").with_rating(3.5);

        assert_eq!(
            explain(&restaurant),
            "Matched on Unspecified cuisine, unspecified budget with 3.5★ rating"
        );
        assert!(explain(&Restaurant::new("Unrated", "Delhi")).contains("unrated"));
    }
}
