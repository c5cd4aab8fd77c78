use serde::Deserialize;

use crate::{
    materials::repo_types::NewMaterial,
    validation::{require_text, Validate},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaterialsRequest {
    #[serde(default)]
    pub new_materials: Vec<MaterialEntry>,
}

#[derive(Debug, Deserialize)]
pub struct MaterialEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub unit: String,
}

impl Validate for CreateMaterialsRequest {
    type Valid = Vec<NewMaterial>;

    fn validate(self) -> Result<Vec<NewMaterial>, Vec<String>> {
        if self.new_materials.is_empty() {
            return Err(vec![
                "newMaterials - Array must contain at least 1 element(s)".into(),
            ]);
        }
        let mut errors = Vec::new();
        let batch: Vec<NewMaterial> = self
            .new_materials
            .into_iter()
            .enumerate()
            .map(|(i, entry)| NewMaterial {
                name: require_text(&format!("newMaterials.{i}.name"), &entry.name, &mut errors),
                unit: require_text(&format!("newMaterials.{i}.unit"), &entry.unit, &mut errors),
            })
            .collect();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(batch)
    }
}
