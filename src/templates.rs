//! Built-in document templates: industry-standard starting points that
//! prefill the generator's project inputs.

use crate::types::{DocType, ProjectInputs};

/// One reusable document template
#[derive(Debug, Clone)]
pub struct DocTemplate {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub doc_type: DocType,
    pub prefill: ProjectInputs,
}

/// Library of the built-in templates
#[derive(Debug)]
pub struct TemplateLibrary {
    templates: Vec<DocTemplate>,
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateLibrary {
    pub fn new() -> Self {
        let templates = vec![
            DocTemplate {
                key: "saas-prd",
                title: "SaaS PRD (Standard)",
                description: "Complete requirements for B2B SaaS features.",
                doc_type: DocType::Prd,
                prefill: ProjectInputs {
                    project_name: "SaaS Platform Feature".to_string(),
                    user_segment: "Enterprise Users".to_string(),
                    kpis: "Adoption Rate, Churn Reduction".to_string(),
                    ..Default::default()
                },
            },
            DocTemplate {
                key: "mobile-launch",
                title: "Mobile App Launch",
                description: "Go-to-market and technical specs for iOS/Android.",
                doc_type: DocType::Prd,
                prefill: ProjectInputs {
                    project_name: "Mobile App v1.0".to_string(),
                    tech_constraints: "React Native, Firebase, Offline-first".to_string(),
                    ..Default::default()
                },
            },
            DocTemplate {
                key: "api-spec",
                title: "API Specification",
                description: "Technical documentation for REST/GraphQL endpoints.",
                doc_type: DocType::ApiSpec,
                prefill: ProjectInputs {
                    problem_statement:
                        "Need to expose internal data to 3rd party developers securely."
                            .to_string(),
                    tech_constraints: "RESTful, OAuth2, Rate Limiting".to_string(),
                    ..Default::default()
                },
            },
            DocTemplate {
                key: "personas",
                title: "User Persona Study",
                description: "Deep dive into user demographics and pain points.",
                doc_type: DocType::Personas,
                prefill: ProjectInputs {
                    business_goal: "Improve User Empathy in Design Team".to_string(),
                    ..Default::default()
                },
            },
            DocTemplate {
                key: "security-compliance",
                title: "Security Compliance",
                description: "Risk assessment and compliance requirements (SOC2/GDPR).",
                doc_type: DocType::Srs,
                prefill: ProjectInputs {
                    project_name: "Security Audit".to_string(),
                    tech_constraints: "GDPR, SOC2 Type II, Encryption at rest".to_string(),
                    ..Default::default()
                },
            },
            DocTemplate {
                key: "sprint-plan",
                title: "Agile Sprint Plan",
                description: "Two-week sprint structure with user stories.",
                doc_type: DocType::SprintPlan,
                prefill: ProjectInputs {
                    project_name: "Sprint 24".to_string(),
                    problem_statement: "Deliver core features for Q3 roadmap.".to_string(),
                    ..Default::default()
                },
            },
        ];

        Self { templates }
    }

    /// Look a template up by its key
    pub fn get(&self, key: &str) -> Option<&DocTemplate> {
        self.templates.iter().find(|t| t.key == key)
    }

    /// All templates, in gallery order
    pub fn list(&self) -> &[DocTemplate] {
        &self.templates
    }
}

/// Get the built-in template library
pub fn get_template_library() -> TemplateLibrary {
    TemplateLibrary::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_key() {
        let library = get_template_library();
        let template = library.get("saas-prd").expect("template exists");
        assert_eq!(template.doc_type, DocType::Prd);
        assert_eq!(template.prefill.user_segment, "Enterprise Users");
        assert!(library.get("nonexistent").is_none());
    }

    #[test]
    fn test_keys_are_unique() {
        let library = get_template_library();
        let mut keys: Vec<_> = library.list().iter().map(|t| t.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), library.list().len());
    }
}
