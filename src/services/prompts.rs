// src/services/prompts.rs

/// A fixed prompt text with `{slot}` placeholders.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    text: &'static str,
}

impl PromptTemplate {
    pub const fn new(text: &'static str) -> Self {
        Self { text }
    }

    /// Replace each `{name}` with its value in a single pass, so slot values
    /// are never rescanned. Unknown placeholders and literal braces are kept.
    pub fn render(&self, slots: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let tail = &rest[open..];
            let slot = tail[1..].find('}').and_then(|close| {
                let name = &tail[1..1 + close];
                slots
                    .iter()
                    .find(|(slot_name, _)| *slot_name == name)
                    .map(|(_, value)| (*value, close + 2))
            });
            match slot {
                Some((value, consumed)) => {
                    out.push_str(value);
                    rest = &tail[consumed..];
                }
                None => {
                    out.push('{');
                    rest = &tail[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}

pub const ANALYSIS_PROMPT: PromptTemplate = PromptTemplate::new(
    r#"
You are an expert restaurant reviewer AI. Your task is to conduct a comprehensive analysis of a given restaurant
based on the user's focus and location. You must base your analysis on publicly available information, reviews, and articles.

**CRITICAL INSTRUCTION:** You MUST format your entire response as a single, valid JSON object. Do not include any text, explanations, or markdown formatting like ```json before or after the JSON object, as your output will be directly parsed.

Here is the JSON schema you must follow:
{
  "restaurant_name": "The name of the restaurant",
  "summary": "A detailed, objective summary of the restaurant, its history, and what it's known for, specifically in the provided location.",
  "healthiness_rating": "A rating out of 5 (e.g., '4/5').",
  "hygiene_rating": "A rating out of 5 (e.g., '4/5').",
  "price_rating": "A rating out of 5, where 5 is very expensive (e.g., '3/5').",
  "food_quality": "A detailed paragraph about the quality of the food, ingredients, popular dishes, and taste.",
  "dietary_options": {
    "vegetarian": "Yes/No, with a brief explanation.",
    "vegan": "Yes/No, with a brief explanation.",
    "gluten_free": "Yes/No, with a brief explanation."
  },
  "ambiance": "A description of the restaurant's atmosphere and decor.",
  "private_space_for_parties": "Yes/No, with details if available.",
  "popular_dishes": ["A list of 3-5 popular or must-try dishes."],
  "service_experience": "A description of the typical customer service.",
  "service_time": "Estimated service time (e.g., 'Fast', 'Moderate', 'Slow').",
  "portion_quantity": "Description of portion sizes (e.g., 'Generous', 'Moderate', 'Small').",
  "rush_hours": "Typical busy times (e.g., 'Weekday evenings, Weekend afternoons')."
}

If a detail cannot be found, use "N/A" for that field. Every field must be present.

---
**USER REQUEST:**
Restaurant Name: {input}
Location Context: {restaurant_location_context}
Analysis Focus: {analysis_type}

If the focus is 'Overall Analysis', give comprehensive detail for every field. For a narrower focus
(e.g. Hygiene, Affordability, Healthiness) still fill every field, but emphasise that focus in the summary
and the related fields.

Now, generate the JSON response based on this request.
"#,
);

pub const CHATBOT_PROMPT: PromptTemplate = PromptTemplate::new(
    r#"
You are a helpful and concise AI assistant for a restaurant analysis tool.
Your ONLY function is to answer questions based on the restaurant analysis provided below.

**CONTEXT: RESTAURANT ANALYSIS**
---
{analysis_content}
---

**USER'S QUESTION:**
{question}

**YOUR INSTRUCTIONS:**
1.  Read the user's question carefully.
2.  Check if the question is related to the restaurant information provided in the CONTEXT above.
3.  **If the question is related:** Answer it concisely using ONLY the information from the CONTEXT. Do not invent new information.
4.  **If the question is NOT related** (e.g., "hello", "what is the meaning of life?", "tell me about another restaurant"): You MUST politely decline. Respond with a message like: "I can only answer questions about the analysis of this specific restaurant. Please ask a question related to the details provided."
5.  Keep your answers brief and to the point.
"#,
);

pub const DISH_RECOMMENDATION_PROMPT: PromptTemplate = PromptTemplate::new(
    r#"
Based on the following restaurant analysis, recommend 3 standout dishes and provide a brief, enticing description for each.

**Analysis Content:**
{analysis_content}

**Your Response Format:**
- **Dish Name 1:** [Description]
- **Dish Name 2:** [Description]
- **Dish Name 3:** [Description]
"#,
);

pub const SLOGAN_PROMPT: PromptTemplate = PromptTemplate::new(
    r#"
Based on the following restaurant analysis, generate a catchy, one-sentence marketing slogan for the restaurant.

**Analysis Content:**
{analysis_content}

**Slogan:**
"#,
);

/// `"located in <place>"`, or empty when no usable location was given.
pub fn location_context(location: Option<&str>) -> String {
    match location.map(str::trim) {
        Some(place) if !place.is_empty() => format!("located in {}", place),
        _ => String::new(),
    }
}

pub fn analysis_prompt(restaurant_name: &str, analysis_type: &str, location: Option<&str>) -> String {
    let location = location_context(location);
    ANALYSIS_PROMPT.render(&[
        ("input", restaurant_name),
        ("restaurant_location_context", &location),
        ("analysis_type", analysis_type),
    ])
}

pub fn chatbot_prompt(analysis_content: &str, question: &str) -> String {
    CHATBOT_PROMPT.render(&[("analysis_content", analysis_content), ("question", question)])
}

pub fn dish_recommendation_prompt(analysis_content: &str) -> String {
    DISH_RECOMMENDATION_PROMPT.render(&[("analysis_content", analysis_content)])
}

pub fn slogan_prompt(analysis_content: &str) -> String {
    SLOGAN_PROMPT.render(&[("analysis_content", analysis_content)])
}
