use serde::Serialize;

/// A product capability shown as one card on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureDescriptor {
    /// Card heading, also used as the card's stable key
    pub title: &'static str,
    pub description: &'static str,
    /// Label of the card's call-to-action button
    pub action_label: &'static str,
    /// Internal route the action navigates to
    pub target: &'static str,
}

impl FeatureDescriptor {
    pub const fn new(
        title: &'static str,
        description: &'static str,
        action_label: &'static str,
        target: &'static str,
    ) -> Self {
        Self {
            title,
            description,
            action_label,
            target,
        }
    }
}

/// Feature cards in display order
pub const FEATURES: [FeatureDescriptor; 9] = [
    FeatureDescriptor::new(
        "Upload Documents",
        "Easily upload your documents to get a summary and key insights generated by our AI.",
        "Upload Document",
        "/home",
    ),
    FeatureDescriptor::new(
        "Generate Insights",
        "Get key ideas and discussion points extracted from your documents effortlessly.",
        "Get Started",
        "/home",
    ),
    FeatureDescriptor::new(
        "Chat with AI",
        "Engage in conversation with our AI to get clarifications and insights about your documents.",
        "Chat Now",
        "/home",
    ),
    FeatureDescriptor::new(
        "Voice Chat with AI",
        "Use voice commands to interact with our AI and get instant responses.",
        "Try Voice Chat",
        "/home",
    ),
    FeatureDescriptor::new(
        "Document Summarization in Multiple Languages",
        "Support for multiple languages to generate summaries and insights from documents.",
        "Try Now",
        "/home",
    ),
    FeatureDescriptor::new(
        "Rewrite Content with AI",
        "Simply choose a desired style and let our AI rewrite your content in seconds.",
        "Learn More",
        "/home",
    ),
    FeatureDescriptor::new(
        "Get Actionable Recommendations",
        "Receive actionable recommendations based on the content of your documents.",
        "Get Recommendations",
        "/home",
    ),
    FeatureDescriptor::new(
        "Sentiment Analysis",
        "Analyze the sentiment of your documents and get a detailed report.",
        "Analyze Sentiment",
        "/home",
    ),
    FeatureDescriptor::new(
        "Document Storage and Management",
        "Securely store, manage, and easily access your documents with our cloud-based solution.",
        "Sign Up",
        "/register",
    ),
];

pub fn features() -> &'static [FeatureDescriptor] {
    &FEATURES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn reference_list_has_nine_entries_in_order() {
        let list = features();
        assert_eq!(list.len(), 9);
        assert_eq!(list[0].title, "Upload Documents");
        assert_eq!(list[8].title, "Document Storage and Management");
        assert_eq!(list[8].target, "/register");
    }

    #[test]
    fn titles_are_unique() {
        let titles: HashSet<_> = features().iter().map(|f| f.title).collect();
        assert_eq!(titles.len(), features().len());
    }

    #[test]
    fn targets_are_internal_routes() {
        for feature in features() {
            assert!(feature.target.starts_with('/'), "{}", feature.title);
            assert!(!feature.action_label.is_empty());
            assert!(!feature.description.is_empty());
        }
    }
}
