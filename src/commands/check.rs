//! Dataset integrity check command

use crate::{
    query::integrity::{self, IntegrityViolation},
    Dataset, Result,
};

use super::common::to_json;

/// Render the check result. Returns the text and whether the data is clean.
pub fn render_check(data: &Dataset<'_>, as_json: bool) -> Result<(String, bool)> {
    let violations: Vec<IntegrityViolation> = integrity::check(data);
    let clean = violations.is_empty();

    if as_json {
        return Ok((to_json(&violations)?, clean));
    }

    let text = if clean {
        format!(
            "✓ {} leagues, {} teams, {} players, {} matches, {} events, {} injury reports: no violations",
            data.leagues().len(),
            data.teams().len(),
            data.players().len(),
            data.matches().len(),
            data.events().len(),
            data.injuries().len()
        )
    } else {
        let mut lines: Vec<String> = violations.iter().map(|v| format!("⚠ {}", v)).collect();
        lines.push(format!("{} violation(s) found", violations.len()));
        lines.join("\n")
    };

    Ok((text, clean))
}

/// Run the integrity check on the compiled-in tables. Returns `false` when
/// violations were found so the binary can exit non-zero.
pub fn handle_check(as_json: bool, verbose: bool) -> Result<bool> {
    if verbose {
        println!("Checking compiled-in dataset...");
    }
    let (text, clean) = render_check(&Dataset::embedded(), as_json)?;
    println!("{}", text);
    Ok(clean)
}
