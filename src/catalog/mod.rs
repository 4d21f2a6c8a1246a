//! Static service catalog and service center lookup.
//!
//! The catalog is immutable reference data. Queries are linear scans or map
//! lookups over a small fixed table.

mod data;

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::models::{Language, Service, ServiceCenter};

static BUILTIN: Lazy<Arc<ServiceCatalog>> =
    Lazy::new(|| Arc::new(ServiceCatalog::new(data::services(), data::service_centers())));

/// Read-only table of services and the centers that complete them.
#[derive(Debug)]
pub struct ServiceCatalog {
    services: Vec<Service>,
    centers: Vec<ServiceCenter>,
    service_index: HashMap<String, usize>,
    center_index: HashMap<String, usize>,
}

impl ServiceCatalog {
    pub fn new(services: Vec<Service>, centers: Vec<ServiceCenter>) -> Self {
        let service_index = services
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();
        let center_index = centers
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();

        Self {
            services,
            centers,
            service_index,
            center_index,
        }
    }

    /// The catalog shipped with the app.
    pub fn builtin() -> Arc<ServiceCatalog> {
        Arc::clone(&BUILTIN)
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn service_centers(&self) -> &[ServiceCenter] {
        &self.centers
    }

    pub fn get_service_by_id(&self, id: &str) -> Option<&Service> {
        self.service_index.get(id).map(|&i| &self.services[i])
    }

    pub fn get_service_center(&self, id: &str) -> Option<&ServiceCenter> {
        self.center_index.get(id).map(|&i| &self.centers[i])
    }

    /// Resolve a service's center association to center records.
    ///
    /// Ids without a matching center are skipped.
    pub fn get_service_centers_for_service(&self, service: &Service) -> Vec<&ServiceCenter> {
        service
            .center_ids()
            .into_iter()
            .filter_map(|id| self.get_service_center(id))
            .collect()
    }

    /// Distinct entity names with at least one in-person service at `center_id`,
    /// in catalog order.
    pub fn entities_at_center(&self, center_id: &str, lang: Language) -> Vec<String> {
        let mut entities: Vec<String> = Vec::new();
        for service in self.bookable_at(center_id) {
            let name = service.entity.get(lang);
            if !entities.iter().any(|e| e == name) {
                entities.push(name.to_string());
            }
        }
        entities
    }

    /// In-person services of `entity` available at `center_id`.
    ///
    /// `entity` may be given in either language.
    pub fn services_for_booking(&self, entity: &str, center_id: &str) -> Vec<&Service> {
        self.bookable_at(center_id)
            .into_iter()
            .filter(|s| s.entity.matches(entity))
            .collect()
    }

    pub fn services_by_category(&self, category: &str) -> Vec<&Service> {
        self.services
            .iter()
            .filter(|s| s.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Case-insensitive substring search over title, description and entity.
    pub fn search_services(&self, query: &str, lang: Language) -> Vec<&Service> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.services.iter().collect();
        }

        self.services
            .iter()
            .filter(|s| {
                [&s.title, &s.description, &s.entity]
                    .iter()
                    .any(|text| text.get(lang).to_lowercase().contains(&needle))
            })
            .collect()
    }

    fn bookable_at(&self, center_id: &str) -> Vec<&Service> {
        self.services
            .iter()
            .filter(|s| s.is_incomplete_digital() && s.is_offered_at(center_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceType;

    #[test]
    fn test_builtin_ids_are_unique_and_resolvable() {
        let catalog = ServiceCatalog::builtin();
        assert_eq!(catalog.service_index.len(), catalog.services().len());
        assert_eq!(catalog.center_index.len(), catalog.service_centers().len());

        for service in catalog.services() {
            for id in service.center_ids() {
                assert!(
                    catalog.get_service_center(id).is_some(),
                    "service {} links unknown center {}",
                    service.id,
                    id
                );
            }
        }
    }

    #[test]
    fn test_get_service_by_id() {
        let catalog = ServiceCatalog::builtin();
        let service = catalog.get_service_by_id("police-clearance").unwrap();
        assert_eq!(service.title.en, "Police Clearance Certificate");
        assert!(catalog.get_service_by_id("nope").is_none());
    }

    #[test]
    fn test_centers_for_single_and_many_association() {
        let catalog = ServiceCatalog::builtin();

        let passport = catalog.get_service_by_id("passport-renewal").unwrap();
        let centers = catalog.get_service_centers_for_service(passport);
        assert_eq!(centers.len(), 1);
        assert_eq!(centers[0].id, "sc-dafna");

        let clearance = catalog.get_service_by_id("police-clearance").unwrap();
        let ids: Vec<&str> = catalog
            .get_service_centers_for_service(clearance)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["sc-rayyan", "sc-wakra", "sc-dafna"]);

        let digital = catalog.get_service_by_id("traffic-violations").unwrap();
        assert!(catalog.get_service_centers_for_service(digital).is_empty());
    }

    #[test]
    fn test_entities_at_center_are_distinct_and_in_person_only() {
        let catalog = ServiceCatalog::builtin();
        let entities = catalog.entities_at_center("sc-rayyan", Language::En);
        assert_eq!(
            entities,
            vec![
                "Ministry of Interior",
                "Ministry of Public Health",
                "Ministry of Commerce and Industry",
            ]
        );

        let arabic = catalog.entities_at_center("sc-rayyan", Language::Ar);
        assert_eq!(arabic[0], "وزارة الداخلية");

        assert!(catalog.entities_at_center("sc-unknown", Language::En).is_empty());
    }

    #[test]
    fn test_services_for_booking_filters_type_entity_and_center() {
        let catalog = ServiceCatalog::builtin();
        let services = catalog.services_for_booking("Ministry of Interior", "sc-rayyan");
        let ids: Vec<&str> = services.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["police-clearance", "residence-permit-renewal", "driving-license-renewal"]
        );
        assert!(services
            .iter()
            .all(|s| s.service_type == ServiceType::IncompleteDigital));

        let same_in_arabic = catalog.services_for_booking("وزارة الداخلية", "sc-rayyan");
        assert_eq!(same_in_arabic.len(), 3);

        // Passport renewal is only offered at Al Dafna.
        let dafna = catalog.services_for_booking("Ministry of Interior", "sc-dafna");
        assert!(dafna.iter().any(|s| s.id == "passport-renewal"));
    }

    #[test]
    fn test_search_and_category() {
        let catalog = ServiceCatalog::builtin();

        let hits = catalog.search_services("  PASSPORT ", Language::En);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "passport-renewal");

        let arabic = catalog.search_services("جواز", Language::Ar);
        assert_eq!(arabic.len(), 1);

        assert_eq!(
            catalog.search_services("", Language::En).len(),
            catalog.services().len()
        );

        let health = catalog.services_by_category("Health");
        assert!(health.iter().all(|s| s.category == "health"));
        assert_eq!(health.len(), 2);
    }
}
