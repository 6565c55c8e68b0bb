// tests/support/builders.rs
use verso_core::application::commands::pages::{
    ComponentInput, ContentInput, MetaTagInput, RevisionInput,
};
use verso_core::domain::page::{Language, WorkflowStatus};

pub fn revision_input(author: &str) -> RevisionInput {
    RevisionInput {
        author: author.into(),
        message: "edited".into(),
        description: String::new(),
    }
}

pub struct ContentInputBuilder {
    input: ContentInput,
}

impl ContentInputBuilder {
    pub fn new(language: Language, title: &str, url: &str) -> Self {
        Self {
            input: ContentInput {
                language,
                title: title.into(),
                body: format!("<p>{title}</p>"),
                url: url.into(),
                url_alias: None,
                workflow_status: WorkflowStatus::Unpublished,
                meta_tag: None,
                components: Vec::new(),
                category_ids: Vec::new(),
                revision: Some(revision_input("alice")),
            },
        }
    }

    pub fn body(mut self, body: &str) -> Self {
        self.input.body = body.into();
        self
    }

    pub fn alias(mut self, alias: &str) -> Self {
        self.input.url_alias = Some(alias.into());
        self
    }

    pub fn workflow(mut self, workflow: WorkflowStatus) -> Self {
        self.input.workflow_status = workflow;
        self
    }

    pub fn revision(mut self, revision: Option<RevisionInput>) -> Self {
        self.input.revision = revision;
        self
    }

    pub fn meta_tag(mut self, title: &str) -> Self {
        self.input.meta_tag = Some(MetaTagInput {
            title: title.into(),
            description: format!("{title} description"),
            keywords: title.into(),
        });
        self
    }

    pub fn component(mut self, kind: &str, payload: serde_json::Value) -> Self {
        let position = self.input.components.len() as i32;
        self.input.components.push(ComponentInput {
            kind: kind.into(),
            payload,
            position,
        });
        self
    }

    pub fn build(self) -> ContentInput {
        self.input
    }
}

pub fn content_input(language: Language, title: &str, url: &str) -> ContentInput {
    ContentInputBuilder::new(language, title, url).build()
}
