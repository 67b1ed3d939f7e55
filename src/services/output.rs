use crate::domain::models::{AssessmentResult, JsonOut, Resource};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    render: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", render(&data));
    }
    Ok(())
}

pub fn render_assessment(result: &AssessmentResult) -> String {
    let mut out = format!("risk: {}\n\n{}\n\nRecommended packing list\n", result.risk, result.summary);
    for item in &result.packing_list {
        out.push_str("- ");
        out.push_str(item);
        out.push('\n');
    }
    out.truncate(out.trim_end().len());
    out
}

pub fn render_resources(resources: &[Resource]) -> String {
    let mut out = String::from("Official emergency resources");
    for r in resources {
        out.push_str(&format!("\n- {}: {}", r.name, r.url));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{render_assessment, render_resources};
    use crate::domain::models::AssessmentInput;
    use crate::services::resources::official_resources;
    use crate::services::summary::generate_summary;

    #[test]
    fn assessment_text_lists_every_item() {
        let result = generate_summary(&AssessmentInput::new(80.0, 20.0, 3, false).with_pets(true));
        let text = render_assessment(&result);
        assert!(text.starts_with("risk: High\n\nBased on wind speeds"));
        assert!(text.contains("Recommended packing list\n- 6 gallons of water\n"));
        assert!(text.ends_with("- Pet food + leash/carrier"));
    }

    #[test]
    fn resources_text() {
        let text = render_resources(&official_resources());
        assert!(text.contains("- National Hurricane Center: https://www.nhc.noaa.gov/"));
        assert!(text.contains("FEMA Disaster Recovery Center Locator"));
    }
}
