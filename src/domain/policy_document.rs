/// Static per-deployment content injected verbatim into every prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDocument {
    pub name: String,
    pub product_description: String,
    pub faq: String,
    pub refusal_instructions: String,
}
