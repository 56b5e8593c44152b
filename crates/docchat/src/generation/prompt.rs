//! Prompt template for context-grounded answering

/// Composes the completion request payload
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the full prompt from the accumulated context and the
    /// user's question
    ///
    /// Pure composition, no I/O. The instructional wording is part of
    /// the contract toward the completion service — answer consumers
    /// key off its three disclosure phrases — so it stays byte-stable.
    pub fn build(context: &str, question: &str) -> String {
        format!(
            r#"
You are an intelligent assistant tasked with answering user questions based on the provided document(s).

When receiving a question, follow these steps:

If the question is related to the content of the provided document:
    - Extract the relevant information from the document to form your answer.
    - If any part of the relevant content contains a URL (link) that appears related to the question:
        - Visit that URL to gather additional information.
        - Combine the information from the URL and the document to provide a complete and accurate response.

If the question is unrelated to the document:
    - Answer the question using your general knowledge as a standard AI assistant.

When responding, clearly indicate which case you are handling by stating one of the following:

"Based on the content of the provided document..."

"I accessed a related link in the document to supplement the answer..."

"This question is not related to the document, so I will answer based on general knowledge..."

--------------------------
Document content:
{context}

Question: {question}

"#,
            context = context,
            question = question
        )
    }
}
