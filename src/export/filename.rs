use std::collections::HashSet;

/// Lower-case ASCII alphanumerics of the site name, `untitled` when none.
pub fn sanitize_site_name(site_name: &str) -> String {
    let cleaned: String = site_name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if cleaned.is_empty() {
        "untitled".to_string()
    } else {
        cleaned
    }
}

/// Project numbers are kept as typed, except for characters that cannot
/// appear in a file name (path separators included), which become `_`.
pub fn sanitize_project_number(project_number: &str) -> String {
    project_number
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// `<sanitized-site-name>_<projectNumber>.xlsx`
pub fn workbook_file_name(site_name: &str, project_number: &str) -> String {
    format!(
        "{}_{}.xlsx",
        sanitize_site_name(site_name),
        sanitize_project_number(project_number)
    )
}

/// `name` if not yet in `taken`, else `stem_2.ext`, `stem_3.ext`, ...
/// The returned name is added to `taken`.
pub fn unique_file_name(name: &str, taken: &mut HashSet<String>) -> String {
    if taken.insert(name.to_string()) {
        return name.to_string();
    }

    let (stem, ext) = match name.rfind('.') {
        Some(dot) => name.split_at(dot),
        None => (name, ""),
    };

    let mut n = 2;
    loop {
        let candidate = format!("{stem}_{n}{ext}");
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_everything_outside_ascii_alphanumerics() {
        assert_eq!(sanitize_site_name("North Plant #2"), "northplant2");
        assert_eq!(sanitize_site_name("Café-Zürich"), "cafzrich");
        assert_eq!(sanitize_site_name("  "), "untitled");
        assert_eq!(workbook_file_name("ACME Corp.", "P-42"), "acmecorp_P-42.xlsx");
    }

    #[test]
    fn project_number_cannot_leave_the_export_dir() {
        assert_eq!(workbook_file_name("Mill", "P/42"), "mill_P_42.xlsx");
        assert_eq!(workbook_file_name("Mill", "../x"), "mill_.._x.xlsx");
        assert_eq!(workbook_file_name("Mill", r"a\b:c?"), "mill_a_b_c_.xlsx");
        assert_eq!(workbook_file_name("Mill", "Lot 7 #B"), "mill_Lot 7 #B.xlsx");
    }

    #[test]
    fn repeated_names_get_a_counter() {
        let mut taken = HashSet::new();
        assert_eq!(unique_file_name("depot_1.xlsx", &mut taken), "depot_1.xlsx");
        assert_eq!(unique_file_name("depot_1.xlsx", &mut taken), "depot_1_2.xlsx");
        assert_eq!(unique_file_name("depot_1.xlsx", &mut taken), "depot_1_3.xlsx");
        assert_eq!(unique_file_name("other_1.xlsx", &mut taken), "other_1.xlsx");
    }
}
