//! Sectioned terminal output.
//!
//! Presentation only: nothing here filters, reorders, or de-duplicates.
//! One headed section per non-empty bucket; the empty query renders as a
//! plain browse list without section headers. Styling goes through
//! `console`, which the caller can switch off wholesale with
//! [`console::set_colors_enabled`].

use crate::model::types::Sample;
use crate::search::SearchResult;
use console::style;
use std::io::{self, Write};

/// One line per sample: name, category, tags.
fn sample_line(sample: &Sample) -> String {
    let mut line = format!("  {}", style(&sample.name).bold());
    if !sample.category.is_empty() {
        line.push_str(&format!("  {}", style(format!("({})", sample.category)).dim()));
    }
    if !sample.tags.is_empty() {
        line.push_str(&format!(
            "  {}",
            style(format!("[{}]", sample.tags.join(", "))).dim()
        ));
    }
    line
}

fn section(out: &mut impl Write, title: &str, samples: &[&Sample]) -> io::Result<()> {
    if samples.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", style(title).underlined())?;
    for sample in samples {
        writeln!(out, "{}", sample_line(sample))?;
    }
    writeln!(out)
}

/// Render one query's result as up to three sections.
pub fn render_results(
    out: &mut impl Write,
    query: &str,
    result: &SearchResult<'_>,
) -> io::Result<()> {
    if query.is_empty() {
        // Browse-everything state: the matcher parks the whole catalog in
        // the name bucket; a header would mislead here.
        for sample in &result.name_matches {
            writeln!(out, "{}", sample_line(sample))?;
        }
        return Ok(());
    }

    if result.is_empty() {
        writeln!(out, "no results for {:?}", query)?;
        return Ok(());
    }

    section(out, "Name matches", &result.name_matches)?;
    section(out, "Description matches", &result.description_matches)?;
    section(out, "Tag matches", &result.tag_matches)?;
    writeln!(
        out,
        "{}",
        style(format!("{} sample(s)", result.len())).dim()
    )
}

pub fn render_list(out: &mut impl Write, samples: &[&Sample]) -> io::Result<()> {
    for sample in samples {
        writeln!(out, "{}", sample_line(sample))?;
    }
    Ok(())
}

pub fn render_categories(out: &mut impl Write, categories: &[(String, usize)]) -> io::Result<()> {
    for (category, count) in categories {
        let label = if category.is_empty() {
            "(uncategorized)"
        } else {
            category.as_str()
        };
        writeln!(out, "  {}  {}", style(label).bold(), style(count).dim())?;
    }
    Ok(())
}

pub fn render_tags(out: &mut impl Write, tags: &[String]) -> io::Result<()> {
    for tag in tags {
        writeln!(out, "  {tag}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search;

    fn catalog() -> Vec<Sample> {
        vec![
            Sample::new("Show Map")
                .with_description("Display a map.")
                .with_category("Maps")
                .with_tags(["map"]),
            Sample::new("Trace Utility Network")
                .with_description("Trace a network.")
                .with_category("Utility networks")
                .with_tags(["trace"]),
        ]
    }

    fn rendered(query: &str) -> String {
        console::set_colors_enabled(false);
        let catalog = catalog();
        let result = search(&catalog, query);
        let mut buf = Vec::new();
        render_results(&mut buf, query, &result).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_query_renders_without_headers() {
        let out = rendered("");
        assert!(out.contains("Show Map"));
        assert!(out.contains("Trace Utility Network"));
        assert!(!out.contains("Name matches"));
    }

    #[test]
    fn non_empty_query_renders_section_headers() {
        let out = rendered("map");
        assert!(out.contains("Name matches"));
        assert!(out.contains("Show Map"));
        assert!(!out.contains("Trace Utility Network"));
    }

    #[test]
    fn empty_result_renders_no_results_line() {
        let out = rendered("zzz");
        assert!(out.contains("no results for \"zzz\""));
    }
}
