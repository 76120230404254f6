// Prompt constants for the career generators.
// Reuses the shared JSON-only fragment from llm_client::prompts.

/// System instruction for career recommendations.
pub const RECOMMENDATION_SYSTEM: &str = "You are an expert career counselor for students in India in 2025. \
    You understand the modern job market, including tech, creative, and non-traditional roles. \
    Your goal is to provide encouraging, realistic, and actionable advice.";

/// Recommendation prompt template.
/// Replace: {interests}, {academics}, {skills}, {career_count}, {json_only_instruction}
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"Based on this student's profile:
- Interests: {interests}
- Academic Strengths: {academics}
- Existing Skills: {skills}

Recommend exactly {career_count} diverse and suitable career paths. For each path, provide a title, a 2-sentence description, a 1-sentence reasoning for why it's a good fit, and an array of the top 10 most important "Required Skills" for this role.
Focus on roles relevant to the Indian job market. Include a mix of tech and non-tech roles if the profile is broad.

{json_only_instruction}

Use this EXACT schema:
{
  "careers": [
    {
      "title": "string",
      "description": "string",
      "reasoning": "string",
      "requiredSkills": ["string", "string"]
    }
  ]
}"#;

/// System instruction for skill roadmaps.
pub const ROADMAP_SYSTEM: &str =
    "You are a specialist in creating detailed learning plans for the Indian market.";

/// Roadmap prompt template. Replace `{career_title}` before sending.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a detailed, actionable skills roadmap in Markdown format for a student in India aspiring to become a "{career_title}".

The roadmap must include these sections:
### 1. Foundational Skills
Core concepts needed.

### 2. Technical Skills
Specific tools, languages, and software.

### 3. Soft Skills
Essential interpersonal abilities.

### 4. Learning Path (Year 1)
Suggest a sequence of learning. Include specific Indian resources like NPTEL or Swayam courses alongside global platforms like Coursera. Suggest 2 practical portfolio projects.

### 5. Top Companies in India
List 5-7 top companies hiring for this role in India (startups and MNCs).

Make the roadmap comprehensive, practical, and tailored for the Indian context."#;
