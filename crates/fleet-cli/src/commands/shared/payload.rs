use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Read a JSON draft from a file, or from stdin when the path is `-`.
pub fn read_draft<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read payload from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read payload file {}", path.display()))?
    };

    serde_json::from_str(&raw).with_context(|| {
        format!(
            "invalid payload in {} (try `flt template <form>` for the expected shape)",
            path.display()
        )
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use fleet_core::entities::movement_register::MovementRegisterDraft;

    use super::read_draft;

    #[test]
    fn reads_draft_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{
                "veh_number": "GW-881-22",
                "month": "March",
                "week": "Week 2",
                "date_from": "2025-03-10",
                "date_to": "2025-03-14",
                "meter_start": 45200,
                "meter_end": 45790,
                "km": 590,
                "security_name": "J. Ankrah"
            }}"#
        )
        .expect("write payload");

        let draft: MovementRegisterDraft = read_draft(file.path()).expect("draft should parse");
        assert_eq!(draft.km, 590);
    }

    #[test]
    fn bad_json_mentions_template_command() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{ not json").expect("write payload");

        let err = read_draft::<MovementRegisterDraft>(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("flt template"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_draft::<MovementRegisterDraft>(std::path::Path::new(
            "/nonexistent/payload.json",
        ))
        .unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/payload.json"));
    }
}
