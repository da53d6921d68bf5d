pub const DEFAULT_ENTRY_COUNT: usize = 51;
pub const COORDINATE_RANGE: f64 = 50.0;

#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// Total entries requested, target word included.
    pub entry_count: usize,
    pub coordinate_range: f64,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            entry_count: DEFAULT_ENTRY_COUNT,
            coordinate_range: COORDINATE_RANGE,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    template: PromptTemplate,
}

impl PromptBuilder {
    pub fn new(template: PromptTemplate) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Expects an already trimmed, non-empty word.
    pub fn build(&self, target_word: &str) -> String {
        let total = self.template.entry_count;
        let related = total.saturating_sub(1);
        let range = self.template.coordinate_range;

        format!(
            concat!(
                "You are an advanced Word2Vec model simulator.\n",
                "Your task is to take a target word and generate a list of {related} semantically related words.\n",
                "You must also include the target word itself in the list.\n",
                "For each word (the target word and the {related} related words), provide 2D coordinates (x, y).\n",
                "The target word '{word}' should ideally be positioned at or near the origin (0,0), ",
                "for example, {{ \"word\": \"{word}\", \"x\": 0, \"y\": 0 }}.\n",
                "Related words should be positioned such that their distance and direction from the target word ",
                "(and from each other) reflect their semantic relationships, similar to how Word2Vec embeddings ",
                "would project into 2D space.\n",
                "The x and y coordinate values should range approximately from -{range} to {range}.\n\n",
                "Output ONLY a valid JSON array of objects. Each object in the array must have the following three keys:\n",
                "- \"word\": string (the word itself)\n",
                "- \"x\": number (the x-coordinate)\n",
                "- \"y\": number (the y-coordinate)\n\n",
                "Do not include any explanatory text, greetings, or any other content outside of the JSON array.\n",
                "The JSON array should contain exactly {total} items: the target word and {related} related words.\n\n",
                "Example for target word 'technology' (this example shows fewer words for brevity, ",
                "but you should generate {total}):\n",
                "[\n",
                "  {{ \"word\": \"technology\", \"x\": 0, \"y\": 0 }},\n",
                "  {{ \"word\": \"innovation\", \"x\": 10, \"y\": 5 }},\n",
                "  {{ \"word\": \"computer\", \"x\": -8, \"y\": 12 }},\n",
                "  {{ \"word\": \"software\", \"x\": -15, \"y\": -3 }},\n",
                "  {{ \"word\": \"science\", \"x\": 20, \"y\": -8 }}\n",
                "]\n\n",
                "Now, generate this for the target word: '{word}'\n"
            ),
            word = target_word,
            related = related,
            total = total,
            range = range,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_word_and_count() {
        let prompt = PromptBuilder::default().build("바다");
        assert!(prompt.contains("target word '바다'"));
        assert!(prompt.contains("\"word\": \"바다\", \"x\": 0, \"y\": 0"));
        assert!(prompt.contains("exactly 51 items"));
        assert!(prompt.contains("50 semantically related words"));
        assert!(prompt.contains("from -50 to 50"));
        assert!(prompt.contains("Output ONLY a valid JSON array"));
    }

    #[test]
    fn prompt_is_deterministic() {
        let builder = PromptBuilder::default();
        assert_eq!(builder.build("love"), builder.build("love"));
    }

    #[test]
    fn custom_template_changes_counts() {
        let builder = PromptBuilder::new(PromptTemplate {
            entry_count: 11,
            coordinate_range: 20.0,
        });
        let prompt = builder.build("school");
        assert!(prompt.contains("exactly 11 items: the target word and 10 related words"));
        assert!(prompt.contains("from -20 to 20"));
    }
}
