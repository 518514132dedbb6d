use crate::models::Sentiment;

/// A pre-authored product-idea skeleton keyed by a keyword pattern.
/// `product_name` may contain a single `{}` placeholder that the matcher
/// fills with a short stub of the topic title (fallback entries only).
#[derive(Debug)]
pub struct IdeaTemplate {
    pub category: &'static str,
    pub sentiment: Sentiment,
    pub product_name: &'static str,
    pub core_functions: &'static str,
    pub target_users: &'static str,
    pub hidden_need: &'static str,
    pub creative_method: &'static str,
    pub monetization: &'static str,
    pub innovation: &'static str,
    pub competitive_barrier: &'static str,
    pub base_score: u32,
}

/// Ordered (pattern, template) pairs. Patterns are matched case-insensitively
/// against the topic title, in declaration order, first match wins; the
/// ordering below is a design input, not an accident. Keywords cover the
/// upstream board's usual vocabulary in both scripts.
pub const TEMPLATES: &[(&str, IdeaTemplate)] = &[
    // safety / disaster: hardware crossover
    (
        "火灾|安全|事故|爆炸|地震|灾害",
        IdeaTemplate {
            category: "Public Safety",
            sentiment: Sentiment::Negative,
            product_name: "\"Guardian\" home safety robot",
            core_functions: "1. Vision-based hazard detection 2. Multi-sensor environment monitoring 3. One-tap SOS with rescue dispatch",
            target_users: "Families with children or elderly members, people living alone, premium residential communities",
            hidden_need: "People want the feeling of being watched over, not another alarm",
            creative_method: "Cross-domain fusion: safety monitoring + companion robotics",
            monetization: "Hardware sales plus a monthly monitoring subscription and insurance partnerships",
            innovation: "Turns cold security hardware into a household companion",
            competitive_barrier: "Hardware, perception models and a rescue network have to be replicated together",
            base_score: 88,
        },
    ),
    // sports: gamification
    (
        "篮球|足球|网球|体育|运动|比赛|夺冠|奥运|世界杯|冠军",
        IdeaTemplate {
            category: "Sports",
            sentiment: Sentiment::Positive,
            product_name: "\"Scout RPG\" sports management game",
            core_functions: "1. Real athlete data feeds 2. Manager-career progression 3. Live-match reward drops",
            target_users: "18-35 male sports fans, gamers, audiences looking for a betting substitute",
            hidden_need: "Fans want participation, not another seat in the stands",
            creative_method: "Gamification: live sport + RPG progression mechanics",
            monetization: "In-game items, season passes and sponsored brand placements",
            innovation: "Turns passive viewers into daily-active players",
            competitive_barrier: "Sports licensing plus game-production capability, a double gate",
            base_score: 86,
        },
    ),
    // aerospace: AR immersion
    (
        "太空|航天|火箭|卫星|探测|月球|火星|宇宙",
        IdeaTemplate {
            category: "Tech",
            sentiment: Sentiment::Positive,
            product_name: "\"Starfarer\" AR space explorer",
            core_functions: "1. Phone-AR spacewalk simulation 2. Collectible virtual planets 3. Mission-driven story campaigns",
            target_users: "Students aged 10-25, sci-fi enthusiasts, parent-child education settings",
            hidden_need: "Nearly everyone carries a space dream that almost no one will live",
            creative_method: "SCAMPER-adapt: bring professional spaceflight down to street level",
            monetization: "Virtual goods, licensing to education providers, space-themed merchandise",
            innovation: "Games lower the barrier to space literacy while collectibles add keepsake value",
            competitive_barrier: "Agency partnerships and accumulated AR craft",
            base_score: 89,
        },
    ),
    // film & tv: interactive viewing
    (
        "电影|电视剧|综艺|票房|演员|导演|剧集|追剧",
        IdeaTemplate {
            category: "Entertainment",
            sentiment: Sentiment::Neutral,
            product_name: "\"Script Room\" immersive cinema",
            core_functions: "1. AI-generated parallel plot branches 2. Audience votes steer the story 3. Offline screenings with online play",
            target_users: "Urban 18-30s, date nights, friend-group outings",
            hidden_need: "Audiences are tired of receiving stories; they want to be inside them",
            creative_method: "Inversion: from watching a show to playing one",
            monetization: "Premium-priced tickets, in-story props, studio IP collaborations",
            innovation: "Converts one-way screen consumption into a two-way experience",
            competitive_barrier: "Cinema-chain relationships and plot-generation tooling",
            base_score: 84,
        },
    ),
    // consumer electronics: edge-user thinking
    (
        "手机|小米|华为|iPhone|数码|电脑|平板|荣耀|vivo|OPPO|苹果\\d|苹果手机|苹果发布|苹果新品",
        IdeaTemplate {
            category: "Consumer Electronics",
            sentiment: Sentiment::Neutral,
            product_name: "\"Digital Estate\" device-handover service",
            core_functions: "1. One-tap digital-asset migration 2. Usage-habit inheritance across devices 3. Residual-value maximization for the old device",
            target_users: "Frequent upgraders, digital-asset-heavy users, multi-device households",
            hidden_need: "The pain of a new device is not the price, it is the break in digital life",
            creative_method: "Edge-user method: design for the anxiety of what an upgrade loses",
            monetization: "Annual service subscription, trade-in premiums, recycling spread",
            innovation: "Sells continuity of digital life instead of another gadget",
            competitive_barrier: "Cross-brand migration tech and earned user trust",
            base_score: 82,
        },
    ),
    // AI: first principles
    (
        "AI|人工智能|ChatGPT|GPT|大模型|机器人|智能",
        IdeaTemplate {
            category: "Tech",
            sentiment: Sentiment::Positive,
            product_name: "\"Second Self\" digital-twin service",
            core_functions: "1. Learns your voice and phrasing 2. Handles routine correspondence for you 3. Responds around the clock",
            target_users: "Executives, creators with large followings, high-net-worth users, long-distance families",
            hidden_need: "People are not short of assistants; they are short of another self",
            creative_method: "First principles: the end state of AI is an extension of the person",
            monetization: "High-end subscription, enterprise customization, API usage fees",
            innovation: "Moves from general-purpose AI to a personal clone per user",
            competitive_barrier: "Personalization training plus privacy compliance",
            base_score: 93,
        },
    ),
    // finance: inversion
    (
        "股票|基金|理财|投资|A股|暴涨|暴跌|牛市|熊市|金银",
        IdeaTemplate {
            category: "Finance",
            sentiment: Sentiment::Neutral,
            product_name: "\"Hindsight\" portfolio replay lab",
            core_functions: "1. Backtest your actual buy/sell points 2. Parallel-universe return comparisons 3. Investing-psychology reports",
            target_users: "Retail investors, investing-education audiences, finance students",
            hidden_need: "What really hurts investors is regret, not the next forecast",
            creative_method: "Inversion: replay the past instead of predicting the future",
            monetization: "Tool subscription, courses, brokerage referrals",
            innovation: "Productizes regret and substitutes reflection for prediction",
            competitive_barrier: "Historical data completeness and behavioral models",
            base_score: 85,
        },
    ),
    // holiday travel: 10x thinking
    (
        "春运|春节|车票|高铁|火车|抢票|回家|返乡",
        IdeaTemplate {
            category: "Mobility",
            sentiment: Sentiment::Neutral,
            product_name: "\"Seat Share\" homebound carpool alliance",
            core_functions: "1. Smart matching of private drivers and riders 2. Company-organized group charters 3. Relay transfers across en-route cities",
            target_users: "Workers returning to smaller cities, car owners, corporate HR teams",
            hidden_need: "Holiday travel is a supply-and-timing mismatch, not a ticketing problem",
            creative_method: "10x thinking: create new capacity instead of optimizing the queue",
            monetization: "Service-fee share, travel insurance, roadside commercial tie-ins",
            innovation: "Aggregates idle private capacity against the seasonal crunch",
            competitive_barrier: "Safety and trust infrastructure, regulatory clearance, network scale",
            base_score: 80,
        },
    ),
    // celebrity fandom: web3 crossover
    (
        "明星|爱豆|粉丝|演唱会|idol|偶像|出道|应援",
        IdeaTemplate {
            category: "Entertainment",
            sentiment: Sentiment::Positive,
            product_name: "\"Fan Senate\" co-creation platform",
            core_functions: "1. Fan votes steer official events 2. On-chain records of supporter contributions 3. Limited collectible drops",
            target_users: "Core fan groups, fan-club organizers, talent agencies",
            hidden_need: "Fans want their contribution to be seen, not just their spending",
            creative_method: "Cross-domain fusion: fandom economics + community governance",
            monetization: "Collectible-drop revenue share, event production fees, merchandise",
            innovation: "Makes fan labor traceable and redeemable",
            competitive_barrier: "Top-artist partnerships and community operations",
            base_score: 78,
        },
    ),
    // solar terms / tradition: heritage renewal
    (
        "立春|春分|谷雨|清明|节气|躲春|咬春|习俗|传统",
        IdeaTemplate {
            category: "Culture",
            sentiment: Sentiment::Positive,
            product_name: "\"Season Box\" heritage subscription",
            core_functions: "1. A themed box for every solar term 2. AR scans unlock the stories behind each custom 3. Tie-in seasonal fairs offline",
            target_users: "Culture-minded consumers aged 25-40, families, gift buyers",
            hidden_need: "Modern audiences are curious about tradition but short on time for it",
            creative_method: "SCAMPER-combine: solar-term culture + blind-box retail + AR",
            monetization: "Annual subscription, single-box sales, brand collaborations",
            innovation: "Makes an abstract calendar tangible and shareable",
            competitive_barrier: "Supply-chain curation, heritage licensing, editorial output",
            base_score: 86,
        },
    ),
    // food & health: personalization
    (
        "美食|餐厅|吃|菜|火锅|烧烤|外卖|食物|食品安全|中毒",
        IdeaTemplate {
            category: "Health",
            sentiment: Sentiment::Neutral,
            product_name: "\"Comfort Plate\" mood-aware dining advisor",
            core_functions: "1. Recipes recommended by mood 2. AI-nutritionist meal plans 3. One-tap ingredient delivery",
            target_users: "People living alone, fitness crowds, anxious eaters",
            hidden_need: "\"What should I eat\" is really \"how do I feel today\"",
            creative_method: "Cross-domain fusion: psychology + nutrition + instant delivery",
            monetization: "Membership, ingredient commerce, restaurant partnerships",
            innovation: "Reframes the question from what to eat to what energy the day needs",
            competitive_barrier: "Mood-inference models, a nutrition knowledge graph, supply chain",
            base_score: 84,
        },
    ),
    // education: career preview
    (
        "考试|高考|考研|学生|老师|学校|毕业|大学|中学",
        IdeaTemplate {
            category: "Education",
            sentiment: Sentiment::Neutral,
            product_name: "\"Time Machine\" career preview studio",
            core_functions: "1. VR day-in-the-life of a hundred professions 2. AI career-fit profiling 3. One-on-one calls with practitioners",
            target_users: "High schoolers, undergraduates, drifting early-career workers, parents",
            hidden_need: "Students choose majors without ever seeing where they lead",
            creative_method: "Inversion: show why to study before drilling how to pass",
            monetization: "Per-session fees, school procurement, employer-branding deals",
            innovation: "Immersion closes the career-awareness gap that pamphlets never did",
            competitive_barrier: "VR content production and practitioner networks",
            base_score: 87,
        },
    ),
    // housing: transparency index
    (
        "房价|买房|租房|装修|房子|楼市|房贷",
        IdeaTemplate {
            category: "Real Estate",
            sentiment: Sentiment::Neutral,
            product_name: "\"Neighbor Score\" community transparency index",
            core_functions: "1. Verified lived-in ratings per compound 2. Anonymous neighbor profiles 3. Live property-management scorecards",
            target_users: "Buyers, renters, residents, property managers",
            hidden_need: "The biggest unknown in a purchase is the neighbors and the management",
            creative_method: "Edge-user method: design for the post-move-in regret scenario",
            monetization: "Listing-platform revenue share, property-management SaaS, local ads",
            innovation: "Quantifies the soft side of a community for the decision moment",
            competitive_barrier: "Data collection logistics, privacy compliance, user trust",
            base_score: 83,
        },
    ),
    // pets: communication
    (
        "宠物|猫|狗|萌宠|铲屎官|养猫|养狗",
        IdeaTemplate {
            category: "Pets",
            sentiment: Sentiment::Positive,
            product_name: "\"Pet Parley\" emotion translator",
            core_functions: "1. AI reads vocalizations for intent 2. Continuous health monitoring 3. Playdate matching nearby",
            target_users: "Pet owners, veterinary clinics, pet brands",
            hidden_need: "An owner's deepest worry is never knowing what the animal wants",
            creative_method: "SCAMPER-substitute: replace guesswork with inference",
            monetization: "Collar hardware, premium features, pet-commerce referrals",
            innovation: "Two-way communication instead of one-way caretaking",
            competitive_barrier: "Ethology research and labeled training data",
            base_score: 85,
        },
    ),
    // international affairs: visualization
    (
        "日本|美国|俄罗斯|国际|外交|贸易|关税|制裁",
        IdeaTemplate {
            category: "International",
            sentiment: Sentiment::Neutral,
            product_name: "\"Worldview\" geopolitics visualizer",
            core_functions: "1. Live relationship graphs between states 2. Event impact-chain tracing 3. Exposure alerts for investors",
            target_users: "Cross-border traders, investors, current-affairs readers, students",
            hidden_need: "International news is too fragmented for ordinary readers to price",
            creative_method: "First principles: complex information demands visual compression",
            monetization: "Professional subscription, enterprise risk feeds, think-tank deals",
            innovation: "Brings desk-analyst geopolitics to a consumer screen",
            competitive_barrier: "Analyst bench strength and source integration",
            base_score: 81,
        },
    ),
];

/// Generic skeletons for titles no pattern recognizes. One of these is
/// chosen per unmatched topic through the analyzer's fallback selector so
/// repeated generic output still varies.
pub const FALLBACK_TEMPLATES: &[IdeaTemplate] = &[
    IdeaTemplate {
        category: "Trending",
        sentiment: Sentiment::Neutral,
        product_name: "\"{} Effect\" trend forecaster",
        core_functions: "1. Hotspot lifecycle prediction 2. Related-topic mining 3. Campaign-timing alerts",
        target_users: "Marketers, independent creators, brand teams",
        hidden_need: "A trend is only worth anything before it peaks",
        creative_method: "First principles: the value of a trend is timing",
        monetization: "SaaS subscription with an API tier and custom reports",
        innovation: "From chasing trends after the fact to anticipating them",
        competitive_barrier: "Forecast accuracy and breadth of data sources",
        base_score: 76,
    },
    IdeaTemplate {
        category: "Trending",
        sentiment: Sentiment::Neutral,
        product_name: "\"Plot Twist Lab\" fact-checking game",
        core_functions: "1. Multi-perspective retelling of the event 2. Players hunt evidence as detectives 3. Reveal-day reward mechanics",
        target_users: "Media-literacy audiences, gamers, students",
        hidden_need: "Readers are tired of being burned by reversals and want to verify for themselves",
        creative_method: "Gamification: fact checking + detective mechanics",
        monetization: "In-game purchases, education partnerships, newsroom licensing",
        innovation: "Makes sober verification work feel like a mystery novel",
        competitive_barrier: "Editorial throughput and game design",
        base_score: 79,
    },
    IdeaTemplate {
        category: "Trending",
        sentiment: Sentiment::Neutral,
        product_name: "\"Mood Barometer\" public-sentiment monitor",
        core_functions: "1. Live collective-emotion tracking 2. Contagion-path analysis 3. Brand-crisis early warning",
        target_users: "Corporate communications, public-affairs desks, newsrooms",
        hidden_need: "Behind every hotspot is a crowd emotion, and the emotion is the real signal",
        creative_method: "10x thinking: upgrade event monitoring to emotion sensing",
        monetization: "Enterprise SaaS, crisis consulting, data reports",
        innovation: "Reads the mood shift a beat earlier than mention-counting tools",
        competitive_barrier: "Emotion-recognition models and collection reach",
        base_score: 82,
    },
];
