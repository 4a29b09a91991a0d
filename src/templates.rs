//! Canned mentor text. Everything the advice engine can say lives here, so
//! editing the wording never touches dispatch logic in `mentor.rs`.

use crate::mentor::MentorContext;

// --- Company-category templates ---

pub fn service_company(company: &str) -> String {
    format!(
        "Service company strategy for {company}:\n\
         \n\
         Technical skills to highlight:\n\
         - Programming languages: Java, Python, C++, JavaScript, with proficiency levels\n\
         - DSA fundamentals: arrays, linked lists, trees, sorting and searching\n\
         - Database skills: SQL, MySQL, Oracle (service companies care a lot about these)\n\
         - Web basics: HTML, CSS, JavaScript and one mainstream framework\n\
         - Testing knowledge: manual testing and basic automation concepts\n\
         \n\
         Resume structure:\n\
         - Academic performance: include 10th, 12th and graduation percentages\n\
         - Certifications: Oracle, Microsoft or similar technical certificates\n\
         - Projects: end-to-end builds that show problem solving\n\
         - Soft skills: communication, teamwork, adaptability for client-facing roles\n\
         \n\
         Emphasize willingness to learn new technologies, strong CS fundamentals,\n\
         any client interaction or presentation experience, and comfort with\n\
         rotational assignments. Avoid overloading the resume with cutting-edge\n\
         stacks they will not use, and never skip academic achievements.\n\
         \n\
         Sample achievement format:\n\
         \"Developed a library management system using Java and MySQL,\n\
         demonstrating strong DSA concepts and database design principles.\""
    )
}

pub fn product_company(company: &str) -> String {
    let specific = if company.contains("flipkart") {
        "\nFlipkart-specific tips:\n\
         - E-commerce domain knowledge: inventory, payments, order flows\n\
         - Experience with high-traffic applications\n\
         - Understanding of Indian market dynamics\n"
    } else if company.contains("amazon") {
        "\nAmazon-specific tips:\n\
         - Cloud technologies (AWS) and scalability challenges\n\
         - Customer-obsession framing in project descriptions\n\
         - Experience with large-scale distributed systems\n"
    } else if company.contains("microsoft") {
        "\nMicrosoft-specific tips:\n\
         - Enterprise software experience, .NET technologies\n\
         - Productivity and collaboration tooling\n\
         - Cross-platform development experience\n"
    } else {
        ""
    };

    format!(
        "Product company strategy for {company}:\n\
         \n\
         Technical excellence focus:\n\
         - Advanced DSA: complex algorithms, time/space complexity, system design basics\n\
         - Modern stack: React, Node.js, Python, Go, cloud platforms\n\
         - Problem solving: LeetCode-style practice, competitive programming\n\
         \n\
         Resume structure:\n\
         - Impact-driven projects: show scale, users affected, performance wins\n\
         - Open source contributions and an active GitHub profile\n\
         - Technical depth over breadth\n\
         - Quantified achievements: \"improved performance by 40%\", \"handled 10K+ users\"\n\
         {specific}\
         \n\
         Key differentiators: ownership and end-to-end thinking, comfort with\n\
         ambiguous requirements, exposure to A/B testing and analytics, agile\n\
         experience.\n\
         \n\
         Sample achievement format:\n\
         \"Built a real-time chat application serving 1000+ concurrent users with\n\
         WebSocket connections and Redis caching, reaching 99.9% uptime.\""
    )
}

pub fn fintech_company(company: &str) -> String {
    let specific = if company.contains("razorpay") {
        "\nRazorpay-specific focus:\n\
         - Payment gateway integration experience\n\
         - B2B product understanding and API-first development\n"
    } else if company.contains("paytm") {
        "\nPaytm-specific focus:\n\
         - Consumer-facing app experience\n\
         - Wallet and payment systems, super-app ecosystem\n"
    } else if company.contains("zerodha") {
        "\nZerodha-specific focus:\n\
         - Trading platform concepts and real-time data processing\n\
         - Financial market understanding\n"
    } else {
        ""
    };

    format!(
        "Fintech strategy for {company}:\n\
         \n\
         Domain-specific skills:\n\
         - Security focus: encryption, secure coding practices\n\
         - Payment systems: UPI, gateways, banking APIs\n\
         - Compliance awareness: basics of financial regulation\n\
         - Data work: financial data handling, fraud detection concepts\n\
         \n\
         Technical skills:\n\
         - Backend: Node.js, Python or Java for robust financial systems\n\
         - Databases: PostgreSQL or MongoDB for transaction handling\n\
         - APIs: RESTful services, webhooks, JWT/OAuth\n\
         {specific}\
         \n\
         Resume highlights: projects that touch money or transactions,\n\
         third-party API integrations, KYC or verification flows. Fintech teams\n\
         value attention to detail and a security mindset above all.\n\
         \n\
         Sample project description:\n\
         \"Developed a personal expense tracker with bank API integration,\n\
         implementing secure transaction categorization for 500+ users.\""
    )
}

pub fn consumer_company(company: &str) -> String {
    let specific = if company.contains("zomato") {
        "\nZomato-specific insights:\n\
         - Restaurant discovery and recommendation systems\n\
         - Review and rating mechanisms, delivery logistics\n"
    } else if company.contains("swiggy") {
        "\nSwiggy-specific insights:\n\
         - Hyperlocal delivery systems and dynamic pricing\n\
         - Multi-category marketplace (food, grocery, more)\n"
    } else {
        ""
    };

    format!(
        "Consumer tech strategy for {company}:\n\
         \n\
         Consumer-focused skills:\n\
         - Mobile development: React Native, Flutter or native\n\
         - Real-time systems: live tracking, notifications\n\
         - Location services: maps, geolocation, routing\n\
         - Performance: load times, offline capability\n\
         \n\
         Domain understanding:\n\
         - Logistics and delivery optimization\n\
         - Two-sided marketplace dynamics\n\
         - A/B testing, user analytics, conversion funnels\n\
         {specific}\
         \n\
         Projects to highlight: food delivery or e-commerce apps,\n\
         location-based services, real-time tracking or notification systems.\n\
         \n\
         Sample achievement:\n\
         \"Built a food delivery app with real-time order tracking, serving 200+\n\
         users with 95% on-time delivery through optimized routing.\""
    )
}

pub fn edtech_company(company: &str) -> String {
    format!(
        "EdTech strategy for {company}:\n\
         \n\
         Education-focused skills:\n\
         - Content delivery: video streaming, CDNs, live classes\n\
         - Learning analytics: progress tracking, adaptive difficulty\n\
         - Interactive features: quizzes, assessments, gamification\n\
         - Accessibility: multi-language support, offline capability\n\
         \n\
         Technical requirements:\n\
         - Mobile-first: most learning happens on phones\n\
         - Scalability for exam-time traffic spikes\n\
         - Engagement metrics and learning-pattern analysis\n\
         \n\
         Domain knowledge that helps: the Indian education system, different\n\
         learning styles and age groups, regional language requirements.\n\
         \n\
         Sample description:\n\
         \"Developed an online quiz platform with adaptive difficulty, serving\n\
         1000+ students with personalized learning paths and 85% completion.\""
    )
}

pub fn generic_indian_company(company: &str) -> String {
    format!(
        "General strategy for {company}:\n\
         \n\
         Universal Indian market skills:\n\
         - Communication: English proficiency, presentation skills\n\
         - Adaptability: working across time zones for global clients\n\
         - Cost consciousness: efficient, scalable solutions\n\
         \n\
         Technical foundation: strong CS fundamentals, analytical thinking,\n\
         quick uptake of new technologies.\n\
         \n\
         Resume tips for the Indian market:\n\
         - Include academic percentages (10th, 12th, graduation)\n\
         - Mention relevant certifications\n\
         - Highlight projects with real-world applications\n\
         - Show progression and a learning mindset\n\
         \n\
         Want more specific advice for a particular company or role type?"
    )
}

// --- Topic templates ---

pub fn resume_guide(ctx: &MentorContext) -> String {
    let saved = if ctx.resume_count > 0 {
        format!(
            "You have {} resume{} saved here; keep one tailored variant per company type.\n\n",
            ctx.resume_count,
            if ctx.resume_count == 1 { "" } else { "s" }
        )
    } else {
        String::new()
    };

    format!(
        "Indian resume optimization guide:\n\
         \n\
         Essential sections:\n\
         - Personal details: name, phone, email, LinkedIn, city\n\
         - Professional summary: 2-3 lines with your value proposition\n\
         - Technical skills grouped by proficiency\n\
         - Experience and projects focused on impact\n\
         - Education with 10th/12th/graduation percentages\n\
         - Certifications\n\
         \n\
         Indian-market specifics: recruiters value academic scores, quantified\n\
         project impact, language skills, and relocation flexibility. Keep it to\n\
         1-2 pages, bullet-pointed, and ATS-friendly; skip fancy graphics.\n\
         \n\
         {saved}\
         Freshers (0-2 years): lead with academic projects, internships,\n\
         coursework, hackathons. Experienced (2+ years): lead with professional\n\
         experience, progression, metrics, mentoring.\n\
         \n\
         Which company or role type are you targeting? I can tailor this further."
    )
}

pub fn cover_letter_guide() -> String {
    "Indian cover letter strategy:\n\
     \n\
     Structure:\n\
     1. Professional greeting (named hiring manager when known)\n\
     2. Strong opening: the role and how you found it\n\
     3. Value proposition tied to their specific needs\n\
     4. Cultural fit: show you understand their market\n\
     5. Professional closing with clear enthusiasm\n\
     \n\
     By company type:\n\
     - Service companies (TCS, Infosys): reliability, process orientation, client focus\n\
     - Product companies (Flipkart, Amazon India): innovation, technical depth, scale\n\
     - Startups (Razorpay, Zomato): adaptability, ownership, fast pace\n\
     \n\
     Sample opening:\n\
     \"I am writing to express my strong interest in the [Position] role at\n\
     [Company]. Having followed [Company]'s journey in transforming the Indian\n\
     [industry] landscape, I am excited to contribute to your mission.\"\n\
     \n\
     Want help drafting one for a specific company?"
        .to_string()
}

pub fn fresher_guide() -> String {
    "Fresher's guide to the Indian job market:\n\
     \n\
     Resume strategy:\n\
     - Highlight CGPA/percentage if strong (above 7.5 / 75%)\n\
     - 3-4 substantial technical projects showing different skills\n\
     - Internships, even short ones\n\
     - Certifications and coding profiles (LeetCode, HackerRank, GeeksforGeeks)\n\
     \n\
     Essential skills: two programming languages (Java/Python/C++), web\n\
     fundamentals plus one framework, SQL, and a solid DSA foundation.\n\
     \n\
     Projects that impress Indian recruiters: e-commerce sites, management\n\
     systems, mobile apps solving a real problem, data analysis, API\n\
     integrations.\n\
     \n\
     Preparation by company type:\n\
     - Service: fundamentals, aptitude tests, group discussions, stability\n\
     - Product: strong GitHub, 200+ DSA problems, system design basics\n\
     - Startups: initiative, real-problem projects, fast learning\n\
     \n\
     Typical fresher offers: service companies 3-6 LPA, product companies\n\
     8-25 LPA, startups 4-12 LPA with possible equity.\n\
     \n\
     Indian companies value potential and learning ability over perfect\n\
     skills. Show enthusiasm and willingness to grow."
        .to_string()
}

pub fn interview_guide() -> String {
    "Indian interview preparation guide:\n\
     \n\
     Common rounds:\n\
     1. Aptitude/online test: quant, logical reasoning, verbal, technical MCQs\n\
     2. Technical: DSA, system design basics, project deep-dives\n\
     3. HR: introduction, why this company, career goals, situational questions\n\
     \n\
     By company type:\n\
     - TCS/Infosys/Wipro: fundamentals over advanced topics, clear\n\
       explanations, willingness to learn, shift and travel questions\n\
     - Flipkart/Amazon/Microsoft: heavy DSA practice, system design,\n\
       behavioral answers in STAR form, leadership principles\n\
     - Razorpay/Paytm/Zomato: business model understanding, product thinking,\n\
       startup mindset\n\
     \n\
     Cultural notes: address interviewers formally at first, balance\n\
     confidence with humility, show long-term commitment.\n\
     \n\
     Good questions to ask: \"What does success look like in this role?\",\n\
     \"What are the team's biggest challenges?\", \"How does the company\n\
     support professional development?\"\n\
     \n\
     Interviews are conversations, not interrogations. Show genuine interest\n\
     and let your preparation speak."
        .to_string()
}

pub fn motivation(ctx: &MentorContext) -> String {
    let progress = if ctx.total > 0 {
        let mut line = format!(
            "- You have submitted {} application{} - that takes courage and persistence.\n",
            ctx.total,
            if ctx.total == 1 { "" } else { "s" }
        );
        let rate = ctx.interview_rate();
        if rate > 0 {
            line.push_str(&format!(
                "- Your interview rate is {rate}% - you are making an impression.\n"
            ));
        }
        line
    } else {
        "- Every step you take is progress, even when it does not feel like it.\n".to_string()
    };

    format!(
        "A reminder for the hard days:\n\
         \n\
         Your progress:\n\
         {progress}\
         \n\
         Remember the Indian success stories: Sundar Pichai faced early\n\
         rejections before leading Google; Satya Nadella worked his way up from\n\
         engineer to CEO; Ritesh Agarwal built OYO after dropping out.\n\
         \n\
         Reality check: the market is competitive, and thousands still land\n\
         great jobs every month. Persistence pays.\n\
         \n\
         Strategy for this week:\n\
         1. Pick 2-3 skills to sharpen\n\
         2. Apply to 5-10 companies across service, product and startups\n\
         3. Connect with 3 new people in your field\n\
         4. Dedicate 2 hours daily to learning\n\
         \n\
         Rejection is redirection. Every \"no\" is practice for the eventual\n\
         \"yes\". Aapka time aayega - your time will come.\n\
         \n\
         What would you like to focus on improving this week?"
    )
}

pub fn stats_getting_started() -> String {
    "Getting started in the Indian job market:\n\
     \n\
     Application strategy:\n\
     - Target mix: 40% service companies, 40% product companies, 20% startups\n\
     - Daily goal: 3-5 tailored applications\n\
     - Follow up politely after one week\n\
     \n\
     Where to apply: Naukri, LinkedIn, Indeed, company career pages, campus\n\
     placements, and referrals above all.\n\
     \n\
     Benchmarks: a 10-20% response rate is normal, 2-5% of applications\n\
     convert to interviews, and a search often takes 50-200 applications.\n\
     \n\
     Tier targets:\n\
     - Tier 1: Google, Microsoft, Amazon, Flipkart, Razorpay (6+ months prep)\n\
     - Tier 2: Walmart Labs, PayPal, Swiggy, Ola, Cred (3-6 months prep)\n\
     - Tier 3: TCS, Infosys, Wipro, HCL, local startups (1-3 months prep)\n\
     \n\
     Log every application here and the numbers will start telling you what\n\
     to fix. Ready to start?"
        .to_string()
}

pub fn stats_analytics(ctx: &MentorContext) -> String {
    let rate = ctx.interview_rate();
    let verdict = if rate > 15 {
        "Excellent - your response rate is above average for the Indian market."
    } else if rate > 8 {
        "Good progress - you are getting decent traction."
    } else {
        "Room for improvement - let's optimize your approach."
    };

    format!(
        "Your job search analytics:\n\
         \n\
         Current stats:\n\
         - Total applications: {total}\n\
         - Pending responses: {applied}\n\
         - Interviews secured: {interviews}\n\
         - Offers received: {offers}\n\
         - Rejections: {rejected}\n\
         - Response rate: {rate}%\n\
         \n\
         {verdict}\n\
         \n\
         Market timing: service companies usually reply in 1-2 weeks, product\n\
         companies in 2-4, startups in days or never. Tuesday to Thursday,\n\
         10am-4pm IST are the best sending windows; avoid festival weeks.\n\
         \n\
         Next week:\n\
         1. Apply to {next_batch} new positions\n\
         2. Follow up on {applied} pending applications\n\
         3. Prepare for upcoming interviews\n\
         4. Network with 5 people at target companies\n\
         \n\
         Keep going - persistence is the one variable fully in your control.",
        total = ctx.total,
        applied = ctx.applied,
        interviews = ctx.interviews,
        offers = ctx.offers,
        rejected = ctx.rejected,
        next_batch = std::cmp::max(10, ctx.total.div_ceil(2)),
    )
}

pub fn capability_overview() -> String {
    "I'm your career mentor for the Indian tech market. Here is what I can\n\
     help with:\n\
     \n\
     Company-specific guidance:\n\
     - Service giants: TCS, Infosys, Wipro, HCL strategies\n\
     - Product leaders: Flipkart, Amazon India, Microsoft positioning\n\
     - Fintech: Razorpay, Paytm, PhonePe preparation\n\
     - Consumer tech: Zomato, Swiggy optimization\n\
     \n\
     Also: resume and cover letter reviews, fresher guidance, interview\n\
     preparation, salary context, and encouragement when the search gets\n\
     heavy.\n\
     \n\
     Try asking:\n\
     - \"How do I prepare for TCS interviews?\"\n\
     - \"What skills do Flipkart look for?\"\n\
     - \"How should a fresher approach the market?\"\n\
     \n\
     What are you working on today?"
        .to_string()
}

// --- Rejection support pools ---
//
// `{company}` is substituted with the rejection's company before a variant
// is chosen.

pub const BASE_SUPPORT: &[&str] = &[
    "Hey, I know this stings right now, but you're doing amazing by putting \
     yourself out there. {company} missing out on you is their loss, not your \
     failure.",
    "This rejection doesn't define your worth or capabilities. You're building \
     resilience with every application, and that's a superpower in itself. Keep \
     going.",
    "I see you're learning and growing from each experience - that's exactly \
     what successful people do. This 'no' is just redirecting you to your \
     perfect 'yes'.",
    "Every rejection is valuable data. You're not just job hunting, you're \
     market researching and skill building. That's incredibly smart.",
    "The fact that you're reflecting on this shows real emotional intelligence. \
     Companies need people who can learn and adapt. Your time will come.",
];

pub const STAGE_APPLICATION: &[&str] = &[
    "Getting rejected at the application stage often means it's about fit or \
     timing, not your qualifications. Consider tailoring your applications more \
     specifically to each role.",
    "Application rejections feel impersonal because they are. You're playing a \
     numbers game here - keep applying, keep improving your resume.",
    "This early-stage rejection might mean your resume needs tweaking. Have you \
     tried using keywords from the job description? Small changes make big \
     differences.",
];

pub const STAGE_PHONE_SCREEN: &[&str] = &[
    "Making it to a phone screen means they liked your profile. This rejection \
     is about communication style or specific requirements - practice your \
     elevator pitch and you'll nail the next one.",
    "Phone screen rejections often come down to clarity or cultural-fit \
     questions. Prepare stories that showcase both your skills and your \
     personality.",
    "You got their attention enough for a call - that's already a win. Use this \
     to refine how you talk about your experience and ask better questions.",
];

pub const STAGE_TECHNICAL: &[&str] = &[
    "Technical rejections are learning goldmines. They show you exactly what to \
     focus on next - you're closer than you think.",
    "Technical rounds are tough, but getting there means your profile is \
     strong. Brush up on the areas they tested and you'll be unstoppable.",
    "Every technical interview makes you better at the next one. Consider this \
     free training - write down what came up and practice those concepts.",
];

pub const STAGE_FINAL_ROUND: &[&str] = &[
    "Final round rejections hurt the most, but they also mean you're SO close. \
     You're clearly interview-ready - it's about finding the right match now.",
    "Making it to final rounds consistently puts you in the top tier of \
     candidates. This is about perfect fit, not your abilities. Your offer is \
     coming.",
    "Final round means they seriously considered you. Sometimes it comes down \
     to tiny details or internal factors you can't control. Stay confident.",
];

pub const STAGE_OFFER_STAGE: &[&str] = &[
    "An offer-stage rejection is rare and usually about budget or internal \
     changes, not you. It actually validates that you're offer-worthy. The next \
     one will stick.",
    "You made it all the way to offer discussions - incredible validation of \
     your skills. This one is definitely about them, not you.",
    "Offer-stage rejections are the universe protecting you from the wrong \
     opportunity. You now know you're at offer level.",
];

pub const REASON_OVERQUALIFIED: &[&str] = &[
    "\"Overqualified\" often means they're worried you'll leave for something \
     better. Emphasize genuine interest in the role and the company's mission.",
    "Being \"overqualified\" is a good problem to have - it means you're \
     impressive. Target slightly more senior roles or stress long-term interest.",
];

pub const REASON_UNDERQUALIFIED: &[&str] = &[
    "\"Underqualified\" feedback is a roadmap for growth. You now know exactly \
     which skills to build next.",
    "Don't let \"underqualified\" discourage you. Sometimes it's about \
     presentation, not actual skills - look at how you're showcasing your \
     experience.",
];

pub const REASON_CULTURAL_FIT: &[&str] = &[
    "\"Cultural fit\" rejections protect you from unhappy work environments. \
     You want somewhere that appreciates who you are authentically.",
    "Cultural fit is subjective and goes both ways. This might have saved you \
     from a workplace where you wouldn't thrive. Trust the process.",
];

pub const REASON_BUDGET: &[&str] = &[
    "Budget constraints are completely outside your control. They wanted you \
     but couldn't afford you - that's actually flattering.",
    "Budget rejections mean you're pricing yourself appropriately and they \
     recognized your value. Find companies that can afford talent.",
];

pub const STRATEGY_TIPS: &[&str] = &[
    "Strategy tip: try focusing on startups this week - they move faster and \
     value potential over perfect fit.",
    "Strategy tip: reach out to your network. Referrals have much higher \
     success rates than cold applications.",
    "Strategy tip: look for companies with multiple open roles on their careers \
     page - they're more likely to say yes.",
    "Strategy tip: try companies that recently raised funding - they're in \
     growth mode and hiring actively.",
    "Strategy tip: consider smaller companies and scale-ups. They offer more \
     growth and are less rigid about requirements.",
];
