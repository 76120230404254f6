//! Chat Response Selector — keyword topic detection plus templated replies.
//!
//! No model call and no learning: the message is lowercased, checked against an
//! ordered list of keyword groups, and a random template from the matching
//! topic's pool is filled in from the user's profile.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::chat::templates::{
    certifications, expected_salary, interview_focus, priority_skills, recommended_tech,
    CAREER_TIPS, DEFAULT_INTERESTS, DEFAULT_SKILLS, DEFAULT_STREAM, MARKET_INSIGHTS,
    SUCCESS_TIPS,
};
use crate::models::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatTopic {
    Greeting,
    CareerAdvice,
    Skills,
    Salary,
    Interview,
    Company,
    Help,
    Default,
}

/// Checked in order on the lowercased message; the first group with a hit wins.
/// Matching is a plain substring test, so "hi" also fires inside "which" or
/// "this" and those messages read as greetings.
/// "job search" is shadowed by "job": that message reads as career advice.
const TOPIC_KEYWORDS: &[(ChatTopic, &[&str])] = &[
    (ChatTopic::Greeting, &["hello", "hi", "hey"]),
    (ChatTopic::CareerAdvice, &["career", "job", "recommendation"]),
    (ChatTopic::Skills, &["skill", "learn", "improve", "course"]),
    (ChatTopic::Salary, &["salary", "pay", "money", "income"]),
    (
        ChatTopic::Interview,
        &["interview", "resume", "job search", "apply"],
    ),
    (
        ChatTopic::Company,
        &["company", "culture", "work environment"],
    ),
    (ChatTopic::Help, &["help", "what can you do", "features"]),
];

pub fn categorize(message: &str) -> ChatTopic {
    let message = message.to_lowercase();

    TOPIC_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| message.contains(k)))
        .map(|(topic, _)| *topic)
        .unwrap_or(ChatTopic::Default)
}

/// Profile-derived values the templates interpolate.
struct ChatContext {
    stream: String,
    interests: Vec<String>,
    skills: Vec<String>,
}

impl ChatContext {
    fn from_profile(profile: Option<&UserProfile>) -> Self {
        let stream = profile
            .map(|p| p.academics.trim())
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_STREAM)
            .to_string();

        let interests: Vec<String> = profile
            .map(|p| {
                p.interests
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let skills: Vec<String> = profile
            .map(|p| {
                p.skills
                    .iter()
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            stream,
            interests: or_defaults(interests, DEFAULT_INTERESTS),
            skills: or_defaults(skills, DEFAULT_SKILLS),
        }
    }

    fn top_interests(&self) -> String {
        self.interests
            .iter()
            .take(2)
            .cloned()
            .collect::<Vec<_>>()
            .join(" and ")
    }

    fn top_skills(&self) -> String {
        self.skills
            .iter()
            .take(2)
            .cloned()
            .collect::<Vec<_>>()
            .join(" and ")
    }
}

fn or_defaults(values: Vec<String>, defaults: &[&str]) -> Vec<String> {
    if values.is_empty() {
        defaults.iter().map(|s| s.to_string()).collect()
    } else {
        values
    }
}

fn pick<R: Rng + ?Sized>(pool: &[&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Returns a reply for `message`. Never empty.
pub fn respond<R: Rng + ?Sized>(
    message: &str,
    profile: Option<&UserProfile>,
    rng: &mut R,
) -> String {
    let ctx = ChatContext::from_profile(profile);
    let mut pool = templates_for(categorize(message), &ctx, rng);
    let index = rng.gen_range(0..pool.len());
    pool.swap_remove(index)
}

fn templates_for<R: Rng + ?Sized>(topic: ChatTopic, ctx: &ChatContext, rng: &mut R) -> Vec<String> {
    let stream = &ctx.stream;
    match topic {
        ChatTopic::Greeting => vec![
            format!(
                "👋 Namaste! I'm Disha, your career companion.\n\n\
                I can see you're into {}. Ask me about careers, skills, salaries, \
                interviews or companies and I'll tailor the answer to your {stream} background.",
                ctx.top_interests()
            ),
            format!(
                "Hello there! 🌟 Great to see you.\n\n\
                With {} in your toolkit you already have a head start. \
                What would you like to explore today?",
                ctx.top_skills()
            ),
        ],
        ChatTopic::CareerAdvice => vec![
            format!(
                "🎯 **Career Recommendations for a {stream} Background:**\n\n\
                Based on your interests in {}, here are high-growth careers:\n\n\
                • **AI/ML Engineer** - ₹8-25 LPA (High demand)\n\
                • **Data Scientist** - ₹6-20 LPA (Analytics focus)\n\
                • **Product Manager** - ₹10-30 LPA (Strategy + tech)\n\
                • **Full Stack Developer** - ₹5-18 LPA (Versatile skills)\n\
                • **DevOps Engineer** - ₹7-22 LPA (Infrastructure focus)\n\n\
                Which area excites you most? I can go deeper on any of them!",
                ctx.top_interests()
            ),
            format!(
                "🌟 **Career Insights Based on Your Profile:**\n\n\
                Your combination of {} skills opens exciting doors!\n\n\
                • Startups offer faster growth (but higher risk)\n\
                • MNCs provide stability and structured learning\n\
                • Remote roles widen the set of companies you can join\n\n\
                Given your {stream} background, priority skills are: {}.\n\n\
                Want me to dive deeper into a specific career path?",
                ctx.top_skills(),
                priority_skills(stream)
            ),
        ],
        ChatTopic::Skills => vec![
            format!(
                "⚡ **Skill Development Roadmap for You:**\n\n\
                1. **Foundation** (2-3 months): choose a core stack\n\
                2. **Specialization** (3-4 months): go deep in one area\n\
                3. **Projects** (2-3 months): build a portfolio\n\
                4. **Certification** (1 month): get industry recognition\n\n\
                Based on your {stream} background, prioritize: {}\n\n\
                Want specific course recommendations?",
                priority_skills(stream)
            ),
            format!(
                "🚀 **Personalized Skill Enhancement Plan:**\n\n\
                **Current Strengths:** {}\n\n\
                **90-Day Sprint:**\n\
                • Weeks 1-4: master {}\n\
                • Weeks 5-8: build 2 projects with it\n\
                • Weeks 9-12: get certified and showcase your portfolio\n\n\
                **Certification Priorities:**\n{}\n\n\
                Ready to start?",
                ctx.skills.join(", "),
                recommended_tech(&ctx.interests),
                certifications(stream)
            ),
        ],
        ChatTopic::Salary => vec![format!(
            "💰 **Salary Insights for Your Profile:**\n\n\
            **Entry Level (0-2 years):**\n\
            • Software Developer: ₹3.5-8 LPA\n\
            • Data Analyst: ₹3-6 LPA\n\
            • UI/UX Designer: ₹3-7 LPA\n\n\
            **Mid Level (3-5 years):**\n\
            • Senior Developer: ₹8-18 LPA\n\
            • Product Manager: ₹12-25 LPA\n\
            • Data Scientist: ₹10-20 LPA\n\n\
            **For {stream} graduates:** expected starting range ₹{}\n\n\
            Want negotiation tips?",
            expected_salary(stream)
        )],
        ChatTopic::Interview => vec![format!(
            "🎯 **Job Search & Interview Prep:**\n\n\
            • Use an ATS-friendly resume with quantified achievements\n\
            • Practice with the STAR method for behavioral questions\n\
            • Research the company's products and culture\n\
            • Referrals fill a large share of openings, so network early\n\n\
            **For {stream} candidates, focus on:** {}\n\n\
            Need help with specific interview questions?",
            interview_focus(stream)
        )],
        ChatTopic::Company => vec![
            "🏢 **Company & Culture Insights:**\n\n\
            **Startups:** fast growth and ownership, less stability\n\
            **Product companies:** best practices and global exposure, competitive hiring\n\
            **Service companies:** structured training and stability, more repetitive work\n\n\
            Red flags: high attrition, no clear growth path, delayed salaries.\n\n\
            Want insights about a specific company?"
                .to_string(),
        ],
        ChatTopic::Help => vec![
            "🌟 **Welcome to Disha AI - Your Career Companion!**\n\n\
            I can help with:\n\
            • Personalized career recommendations\n\
            • Skill gap analysis and learning roadmaps\n\
            • Salary benchmarks and company insights\n\
            • Resume and interview preparation\n\n\
            Try asking: \"What career suits my profile?\" or \"How do I improve my skills?\""
                .to_string(),
        ],
        ChatTopic::Default => vec![
            format!(
                "That's a great question! 🤔\n\n**🔥 Quick Career Tip:** {}\n\n\
                Ask me about careers, skills, salaries, interviews or companies.",
                pick(CAREER_TIPS, rng)
            ),
            format!(
                "I'd love to help with that! 💭\n\n**📈 Today's Career Insight:** {}\n\n\
                What would you like to know more about?",
                pick(MARKET_INSIGHTS, rng)
            ),
            format!(
                "Interesting question! 🌟\n\n**💡 Career Success Tip:** {}\n\n\
                How else can I assist you today?",
                pick(SUCCESS_TIPS, rng)
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_categorize_topics() {
        assert_eq!(categorize("Hello!"), ChatTopic::Greeting);
        assert_eq!(categorize("hi disha, good morning"), ChatTopic::Greeting);
        assert_eq!(categorize("Best CAREER for me?"), ChatTopic::CareerAdvice);
        assert_eq!(categorize("how do I learn react"), ChatTopic::Skills);
        assert_eq!(categorize("what's the average income"), ChatTopic::Salary);
        assert_eq!(categorize("tips for my interview"), ChatTopic::Interview);
        assert_eq!(categorize("tell me about company culture"), ChatTopic::Company);
        assert_eq!(categorize("what can you do"), ChatTopic::Help);
        assert_eq!(categorize("tell me a joke"), ChatTopic::Default);
    }

    #[test]
    fn test_categorize_order_is_significant() {
        // "job search" loses to "job".
        assert_eq!(categorize("job search strategy"), ChatTopic::CareerAdvice);
        // Skills is checked before salary.
        assert_eq!(categorize("skills that pay well"), ChatTopic::Skills);
        // Greeting is checked before everything else.
        assert_eq!(categorize("hey, salary?"), ChatTopic::Greeting);
    }

    #[test]
    fn test_greeting_matches_anywhere_in_message() {
        assert_eq!(categorize("oh hello there"), ChatTopic::Greeting);
        assert_eq!(categorize("well hey you"), ChatTopic::Greeting);
        // Substring matching over-matches short greetings.
        assert_eq!(categorize("which career suits me?"), ChatTopic::Greeting);
        assert_eq!(categorize("this is confusing"), ChatTopic::Greeting);
    }

    #[test]
    fn test_respond_is_never_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut profile = UserProfile::new("u1");
        profile.academics = "Computer Science".to_string();
        profile.interests = "AI, Data".to_string();
        profile.skills = vec!["Python".to_string(), "SQL".to_string()];

        let messages = [
            "",
            "hi",
            "career?",
            "skills",
            "salary",
            "interview",
            "company",
            "help",
            "🙂",
            "random words",
        ];
        for message in messages {
            for _ in 0..5 {
                assert!(!respond(message, Some(&profile), &mut rng).is_empty());
                assert!(!respond(message, None, &mut rng).is_empty());
            }
        }
    }

    #[test]
    fn test_respond_interpolates_profile() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut profile = UserProfile::new("u1");
        profile.academics = "Computer Science".to_string();

        let reply = respond("what salary can I expect", Some(&profile), &mut rng);
        assert!(reply.contains("Computer Science"));
        assert!(reply.contains("4-8 LPA"));
    }

    #[test]
    fn test_context_defaults_without_profile() {
        let ctx = ChatContext::from_profile(None);
        assert_eq!(ctx.stream, "General");
        assert_eq!(ctx.top_interests(), "Technology and Innovation");
        assert_eq!(ctx.top_skills(), "Problem Solving and Communication");
    }
}
