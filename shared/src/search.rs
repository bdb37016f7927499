use crate::api::endpoints;

/// Filters for `/api/students/search`. Blank text filters and an unset
/// vaccinated flag are left out of the query entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentSearch {
    pub name: String,
    pub student_class: String,
    pub student_id: String,
    pub vaccinated: Option<bool>,
}

impl StudentSearch {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        for (key, value) in [
            ("name", &self.name),
            ("studentClass", &self.student_class),
            ("studentId", &self.student_id),
        ] {
            let value = value.trim();
            if !value.is_empty() {
                pairs.push((key, value.to_string()));
            }
        }
        if let Some(vaccinated) = self.vaccinated {
            pairs.push(("vaccinated", vaccinated.to_string()));
        }
        pairs
    }

    pub fn path_and_query(&self) -> String {
        endpoints::with_query(endpoints::STUDENT_SEARCH, &self.query_pairs())
    }

    /// Value for the vaccinated `<select>`: `""`, `"true"` or `"false"`.
    pub fn vaccinated_option(&self) -> &'static str {
        match self.vaccinated {
            None => "",
            Some(true) => "true",
            Some(false) => "false",
        }
    }

    pub fn parse_vaccinated_option(value: &str) -> Option<bool> {
        match value {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_produce_bare_path() {
        assert_eq!(StudentSearch::default().path_and_query(), "/api/students/search");
    }

    #[test]
    fn test_only_provided_filters_are_sent() {
        let search = StudentSearch {
            name: "  ".to_string(),
            student_class: "5A".to_string(),
            student_id: String::new(),
            vaccinated: Some(false),
        };
        assert_eq!(
            search.query_pairs(),
            vec![("studentClass", "5A".to_string()), ("vaccinated", "false".to_string())]
        );
        assert_eq!(
            search.path_and_query(),
            "/api/students/search?studentClass=5A&vaccinated=false"
        );
    }

    #[test]
    fn test_all_filters_keep_order() {
        let search = StudentSearch {
            name: "Ana".to_string(),
            student_class: "6B".to_string(),
            student_id: "S002".to_string(),
            vaccinated: Some(true),
        };
        let keys: Vec<_> = search.query_pairs().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "studentClass", "studentId", "vaccinated"]);
    }

    #[test]
    fn test_vaccinated_option_round_trip() {
        for value in ["", "true", "false"] {
            let search = StudentSearch {
                vaccinated: StudentSearch::parse_vaccinated_option(value),
                ..Default::default()
            };
            assert_eq!(search.vaccinated_option(), value);
        }
    }
}
