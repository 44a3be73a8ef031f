//! Terminal rendering of recommendation results.

use catalog::GeoPoint;
use colored::Colorize;
use engine::{Recommendation, title_case};

/// Shown instead of a result list when nothing matched
pub const NO_MATCHES: &str = "No restaurants found matching your criteria.";

/// Maps search link for a position
pub fn map_link(point: &GeoPoint) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={},{}",
        point.latitude, point.longitude
    )
}

/// Render one result as a block of lines
pub fn format_recommendation(rank: usize, rec: &Recommendation) -> String {
    let r = &rec.restaurant;
    let cuisine = r
        .primary_cuisine
        .as_deref()
        .map(title_case)
        .unwrap_or_else(|| "Unspecified".to_string());
    let category = r
        .cost_category
        .map(|c| title_case(c.as_str()))
        .unwrap_or_else(|| "Unspecified".to_string());
    // Truncated, not rounded
    let cost = r
        .cost
        .map(|c| format!("Approx ₹{} for two", c as u64))
        .unwrap_or_else(|| "cost unknown".to_string());
    let rating = r
        .rating
        .map(|v| format!("{v:.1}★"))
        .unwrap_or_else(|| "unrated".to_string());

    let mut lines = vec![
        format!("{}. {}", rank.to_string().green(), r.name.bold()),
        format!("   - Cuisine: {}", cuisine.bold()),
        format!("   - Cost Category: {} ({})", category.bold(), cost),
        format!("   - Rating: {}", rating.bold()),
        format!("   {}", rec.explanation),
    ];
    if let Some(point) = &r.location {
        lines.push(format!("   - Map: {}", map_link(point).cyan()));
    }
    lines.join("\n")
}

/// Print results, or the no-match warning, to stdout
pub fn print_recommendations(recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        println!("{}", NO_MATCHES.yellow());
        return;
    }
    println!("{}", "Restaurant Recommendations:".bold().blue());
    for (idx, rec) in recommendations.iter().enumerate() {
        println!("{}", format_recommendation(idx + 1, rec));
        println!("{}", "---".dimmed());
    }
}
