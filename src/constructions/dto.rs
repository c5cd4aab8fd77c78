use serde::Deserialize;

use crate::{
    constructions::repo_types::ConstructionParams,
    validation::{require_datetime, require_text, Validate},
};

/// Body for both `POST /constructions` and `PATCH /constructions/:id`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructionRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub technical_manager: String,
    #[serde(default)]
    pub initial_date: String,
    #[serde(default)]
    pub end_date: String,
}

impl Validate for ConstructionRequest {
    type Valid = ConstructionParams;

    fn validate(self) -> Result<ConstructionParams, Vec<String>> {
        let mut errors = Vec::new();
        let name = require_text("name", &self.name, &mut errors);
        let address = require_text("address", &self.address, &mut errors);
        let client = require_text("client", &self.client, &mut errors);
        let technical_manager =
            require_text("technicalManager", &self.technical_manager, &mut errors);
        let initial_date = require_datetime("initialDate", &self.initial_date, &mut errors);
        let end_date = require_datetime("endDate", &self.end_date, &mut errors);

        match (initial_date, end_date) {
            (Some(initial_date), Some(end_date)) if errors.is_empty() => {
                if end_date < initial_date {
                    return Err(vec!["endDate - Must not be before initialDate".into()]);
                }
                Ok(ConstructionParams {
                    name,
                    address,
                    client,
                    technical_manager,
                    initial_date,
                    end_date,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(initial: &str, end: &str) -> ConstructionRequest {
        ConstructionRequest {
            name: "Residencial Aurora".into(),
            address: "Rua A, 10".into(),
            client: "Construtora X".into(),
            technical_manager: "Eng. Paula".into(),
            initial_date: initial.into(),
            end_date: end.into(),
        }
    }

    #[test]
    fn accepts_well_formed_body() {
        let params = request("2024-01-10T00:00:00Z", "2024-12-20T00:00:00Z")
            .validate()
            .expect("valid");
        assert_eq!(params.technical_manager, "Eng. Paula");
        assert!(params.end_date > params.initial_date);
    }

    #[test]
    fn rejects_end_before_start() {
        let errors = request("2024-12-20T00:00:00Z", "2024-01-10T00:00:00Z")
            .validate()
            .unwrap_err();
        assert_eq!(errors, vec!["endDate - Must not be before initialDate"]);
    }

    #[test]
    fn reports_missing_fields_by_json_name() {
        let errors = ConstructionRequest {
            name: String::new(),
            address: String::new(),
            client: "c".into(),
            technical_manager: String::new(),
            initial_date: "yesterday".into(),
            end_date: String::new(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            errors,
            vec![
                "name - Required",
                "address - Required",
                "technicalManager - Required",
                "initialDate - Invalid datetime",
                "endDate - Required",
            ]
        );
    }
}
