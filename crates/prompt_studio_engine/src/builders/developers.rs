//! Software engineering deliverables.

use super::{PromptBuilder, field, field_line};
use crate::join;
use prompt_studio_core::{PromptContext, Settings};
use std::str::FromStr;

/// Deliverable selected by the `outputType` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumString)]
enum Deliverable {
    Architecture,
    Database,
    #[strum(serialize = "API")]
    Api,
    #[default]
    Code,
}

const ARCHITECTURE: &str = "
Generate a complete system architecture including:
1. High-level architecture diagram (described textually)
2. Service breakdown and responsibilities
3. Communication patterns (REST/GraphQL/gRPC)
4. Scalability considerations
5. Security layers
6. Deployment strategy (Docker, K8s, CI/CD)";

const DATABASE: &str = "
Design the complete database schema:
1. Entity-Relationship diagram (described textually)
2. Table definitions with columns, types, and constraints
3. Indexes and optimization strategy
4. Migration strategy
5. Seed data examples";

const API: &str = "
Design the complete API structure:
1. RESTful endpoint definitions (method, path, description)
2. Request/Response schemas (JSON)
3. Authentication & authorization flow
4. Rate limiting strategy
5. Error handling patterns
6. API versioning approach";

const CODE: &str = "
Generate production-ready code with:
1. Project structure and file organization
2. Core component/module implementations
3. State management setup
4. Routing configuration
5. Error handling and loading states
6. TypeScript types/interfaces
7. Unit test examples
";

/// Engineering persona plus one deliverable checklist.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevelopersBuilder;

impl PromptBuilder for DevelopersBuilder {
    fn build(&self, _model: &str, settings: &Settings, context: &PromptContext) -> String {
        let mut prompt = join(&[
            "You are a senior full-stack software engineer.",
            &format!(
                "Build a {} using {}.",
                field(settings, "productType"),
                field(settings, "techStack")
            ),
            "",
            "Requirements:",
            &field_line("Code Level", settings, "codeLevel"),
            &field_line("Product Type", settings, "productType"),
            &field_line("Tech Stack", settings, "techStack"),
        ]);

        let deliverable = settings
            .text("outputType")
            .and_then(|value| Deliverable::from_str(value).ok())
            .unwrap_or_default();
        match deliverable {
            Deliverable::Architecture => prompt.push_str(ARCHITECTURE),
            Deliverable::Database => prompt.push_str(DATABASE),
            Deliverable::Api => prompt.push_str(API),
            Deliverable::Code => {
                prompt.push_str(CODE);
                prompt.push_str(&format!(
                    "\nFollow {} coding standards with proper error handling, documentation, and best practices.",
                    field(settings, "codeLevel")
                ));
            }
        }

        if let Some(text) = context.text() {
            prompt.push_str(&format!("\n\nAdditional Requirements:\n{}", text));
        }
        prompt
    }
}
