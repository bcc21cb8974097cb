//! Deterministic assistant answers rendered from canned templates.

use async_trait::async_trait;

use crate::analysis;
use crate::error::Result;
use crate::format::{fee_label, join_or};
use crate::generator::TextGenerator;
use crate::intent::{BankIntent, Intent, IntentRule, RULES, classify_with};
use crate::models::{CreditCard, Feature};

/// Rule-based assistant. Always answers and never touches the network.
#[derive(Debug, Clone)]
pub struct RuleBasedResponder {
    rules: Vec<IntentRule>,
}

impl Default for RuleBasedResponder {
    fn default() -> Self {
        Self::new(RULES.to_vec())
    }
}

impl RuleBasedResponder {
    pub fn new(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    pub fn classify(&self, message: &str) -> Intent {
        classify_with(&self.rules, message)
    }

    pub fn respond(&self, message: &str, cards: &[CreditCard]) -> String {
        let intent = self.classify(message);
        tracing::debug!(?intent, "Rule-based responder selected intent");
        render(intent, message, cards)
    }
}

#[async_trait]
impl TextGenerator for RuleBasedResponder {
    async fn chat_reply(&self, message: &str, catalog: &[CreditCard]) -> Result<String> {
        Ok(self.respond(message, catalog))
    }

    async fn compare_analysis(&self, cards: &[CreditCard]) -> Result<String> {
        Ok(analysis::fallback_report(cards))
    }
}

/// Renders the answer for an already classified message.
pub fn render(intent: Intent, message: &str, cards: &[CreditCard]) -> String {
    match intent {
        Intent::Bank(bank) => bank_answer(bank, &intent.select(cards)),
        Intent::Lounge => lounge_answer(&intent.select(cards)),
        Intent::Student => student_answer(&intent.select(cards)),
        Intent::Fuel => fuel_answer(&intent.select(cards)),
        Intent::NoAnnualFee => no_fee_answer(&intent.select(cards)),
        Intent::Cashback => cashback_answer(&intent.select(cards)),
        Intent::OnlineShopping => online_answer(&intent.select(cards)),
        Intent::Comparison => comparison_answer(message, cards),
        Intent::Travel => travel_answer(&intent.select(cards)),
        Intent::Premium => premium_answer(&intent.select(cards)),
        Intent::Welcome => welcome_answer(cards),
    }
}

/// Shared card block used by most answers.
pub fn card_summary(card: &CreditCard) -> String {
    let features: Vec<&str> = (card.features.enabled() & Feature::highlighted())
        .iter()
        .map(Feature::label)
        .collect();
    let benefits: Vec<String> = card
        .benefits
        .iter()
        .take(3)
        .map(|b| format!("{}: {}", b.kind, b.description))
        .collect();
    format!(
        "**{}**\n\
         • Annual Fee: {}\n\
         • Joining Fee: {}\n\
         • Reward Rate: {}x points per transaction\n\
         • Credit Limit: {}\n\
         • Interest Rate: {}\n\
         • Key Features: {}\n\
         • Top Benefits: {}\n\
         • Best For: {}",
        card.display_name(),
        card.annual_fee_label(),
        card.joining_fee_label(),
        card.reward_rate,
        card.credit_limit,
        card.interest_rate,
        join_or(&features, "Standard features"),
        benefits.join(", "),
        card.target_audience.join(", "),
    )
}

fn summaries(cards: &[&CreditCard]) -> String {
    cards
        .iter()
        .map(|&c| card_summary(c))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn blocks<F>(cards: &[&CreditCard], block: F) -> String
where
    F: Fn(&CreditCard) -> String,
{
    cards.iter().map(|&c| block(c)).collect::<Vec<_>>().join("\n\n")
}

fn bullets(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|l| format!("• {l}"))
        .collect::<Vec<_>>()
        .join("\n")
}

struct BankCopy {
    title: &'static str,
    lead: &'static str,
    overview: &'static str,
    strengths: &'static [&'static str],
    closing: &'static str,
}

fn bank_copy(bank: BankIntent) -> BankCopy {
    match bank {
        BankIntent::Hdfc => BankCopy {
            title: "HDFC Bank",
            lead: "HDFC Bank offers {n} excellent credit cards in our database:",
            overview: "HDFC Bank is one of India's leading private sector banks, known for premium credit cards with excellent rewards and customer service. Their cards are popular among professionals and frequent travelers.",
            strengths: &[
                "Excellent customer service and support",
                "Wide acceptance across India and internationally",
                "Premium lifestyle benefits and offers",
                "Strong reward programs and cashback options",
            ],
            closing: "Would you like me to compare specific HDFC cards or help you choose between them?",
        },
        BankIntent::Axis => BankCopy {
            title: "Axis Bank",
            lead: "Axis Bank provides {n} premium credit cards:",
            overview: "Axis Bank is known for its innovative credit card products, especially the Magnus series which offers premium benefits for high spenders. They focus on lifestyle and travel benefits.",
            strengths: &[
                "Innovative reward programs with high earning rates",
                "Excellent travel and lifestyle benefits",
                "Premium lounge access and concierge services",
                "Strong partnerships with luxury brands",
            ],
            closing: "Need help deciding between Axis cards or comparing with other banks?",
        },
        BankIntent::Sbi => BankCopy {
            title: "SBI Card",
            lead: "SBI Card offers {n} diverse credit card options:",
            overview: "SBI Card is India's largest credit card issuer, offering cards for every segment from students to premium customers. They're known for their wide acceptance and reliable service.",
            strengths: &[
                "Largest network and acceptance in India",
                "Cards for every income segment",
                "Competitive annual fees and charges",
                "Strong online shopping partnerships",
            ],
            closing: "Want to know more about any specific SBI card or compare with other options?",
        },
        BankIntent::Icici => BankCopy {
            title: "ICICI Bank",
            lead: "ICICI Bank features {n} popular credit cards:",
            overview: "ICICI Bank is a pioneer in digital banking and offers innovative credit card products. They're particularly strong in online shopping partnerships and cashback offers.",
            strengths: &[
                "Strong digital banking platform",
                "Excellent online shopping partnerships (Amazon, etc.)",
                "Competitive cashback and reward rates",
                "Good customer service and mobile app",
            ],
            closing: "Would you like detailed information about any ICICI card or comparisons?",
        },
    }
}

fn bank_answer(bank: BankIntent, cards: &[&CreditCard]) -> String {
    let copy = bank_copy(bank);
    let short = copy.title.split_whitespace().next().unwrap_or(copy.title);
    format!(
        "🏦 **{title} Credit Cards**\n\n{lead}\n\n{cards}\n\n**{title} Overview:**\n{overview}\n\n**Why Choose {short} Cards:**\n{strengths}\n\n{closing}",
        title = copy.title,
        lead = copy.lead.replace("{n}", &cards.len().to_string()),
        cards = summaries(cards),
        overview = copy.overview,
        short = short,
        strengths = bullets(copy.strengths),
        closing = copy.closing,
    )
}

fn lounge_answer(cards: &[&CreditCard]) -> String {
    let listing = blocks(cards, |card| {
        let lounge = card
            .benefit_of_kind("Lounge Access")
            .and_then(|b| b.value.as_ref())
            .map(|v| v.to_string())
            .unwrap_or_else(|| "Available".to_string());
        let extras = [
            (card.features.fuel_surcharge_waiver, "Fuel Surcharge Waiver"),
            (card.features.movie_tickets, "Movie Offers"),
            (card.features.insurance_cover, "Insurance Cover"),
        ];
        let extras: Vec<&str> = extras.iter().filter(|(on, _)| *on).map(|(_, l)| *l).collect();
        format!(
            "**{}**\n• Annual Fee: {}\n• Lounge Access: {}\n• Additional Benefits: {}\n• Best For: {}",
            card.display_name(),
            card.annual_fee_label(),
            lounge,
            join_or(&extras, "None"),
            card.target_audience.join(", "),
        )
    });
    format!(
        "✈️ **Credit Cards with Airport Lounge Access**\n\n\
         I found {n} cards that offer complimentary airport lounge access:\n\n\
         {listing}\n\n\
         **About Airport Lounge Access:**\n\
         Airport lounges provide a comfortable space to relax before flights with complimentary food, beverages, Wi-Fi, and quiet environment. This benefit is especially valuable for frequent travelers.\n\n\
         **Tips for Using Lounge Access:**\n{tips}\n\n\
         Need help choosing the best lounge access card for your travel needs?",
        n = cards.len(),
        listing = listing,
        tips = bullets(&[
            "Check if the card covers domestic and/or international lounges",
            "Some cards have visit limits per year",
            "Priority Pass is the most widely accepted lounge network",
            "Always carry your credit card for lounge entry",
        ]),
    )
}

fn student_answer(cards: &[&CreditCard]) -> String {
    format!(
        "🎓 **Best Credit Cards for Students & Beginners**\n\n\
         Perfect for students and first-time credit card users! Here are {n} excellent options:\n\n\
         {listing}\n\n\
         **Why These Cards Are Perfect for Students:**\n{why}\n\n\
         **Tips for First-Time Credit Card Users:**\n{tips}\n\n\
         **Building Credit History:**\n\
         Starting with these cards helps establish a positive credit history, which is crucial for future loans, higher credit limits, and premium cards.\n\n\
         Would you like specific advice on which card would be best for your situation?",
        n = cards.len(),
        listing = summaries(cards),
        why = bullets(&[
            "Low or no annual fees to minimize costs",
            "Easy approval process for limited credit history",
            "Good reward rates to start building benefits",
            "Educational resources and customer support",
        ]),
        tips = bullets(&[
            "Always pay your full balance on time to avoid interest",
            "Keep your credit utilization below 30% of the limit",
            "Use the card regularly but responsibly to build credit history",
            "Set up automatic payments to never miss due dates",
            "Monitor your credit score regularly",
        ]),
    )
}

fn fuel_answer(cards: &[&CreditCard]) -> String {
    let listing = blocks(cards, |card| {
        let benefit = card.benefit_mentioning(&["fuel"]);
        let description = benefit
            .map(|b| b.description.clone())
            .unwrap_or_else(|| "Fuel surcharge waiver available".to_string());
        let savings = benefit
            .and_then(|b| b.value.as_ref())
            .map(|v| v.to_string())
            .unwrap_or_else(|| "1% surcharge waiver".to_string());
        let extras = [
            (card.features.lounge_access, "Lounge Access"),
            (card.features.movie_tickets, "Movie Offers"),
        ];
        let extras: Vec<&str> = extras.iter().filter(|(on, _)| *on).map(|(_, l)| *l).collect();
        format!(
            "**{}**\n• Annual Fee: {}\n• Fuel Benefit: {}\n• Fuel Savings: {}\n• Additional Features: {}",
            card.display_name(),
            card.annual_fee_label(),
            description,
            savings,
            join_or(&extras, "None"),
        )
    });
    format!(
        "⛽ **Credit Cards with Fuel Benefits**\n\n\
         Save money on every fuel purchase with these {n} cards:\n\n\
         {listing}\n\n\
         **Understanding Fuel Surcharge Waiver:**\n\
         When you pay for fuel using credit cards, petrol pumps typically charge a 1% surcharge. Cards with fuel surcharge waiver eliminate this extra cost, effectively giving you a 1% discount on fuel.\n\n\
         **How Fuel Benefits Work:**\n{how}\n\n\
         **Calculating Your Savings:**\n\
         If you spend ₹5,000 monthly on fuel, a 1% waiver saves you ₹600 annually, which can offset the annual fee of many cards!\n\n\
         Want to calculate potential savings based on your fuel spending?",
        n = cards.len(),
        listing = listing,
        how = bullets(&[
            "Surcharge waiver applies to transactions within specified limits (usually ₹400-₹5,000)",
            "Some cards offer additional cashback on fuel purchases",
            "Benefits typically apply at all fuel stations across India",
            "Monthly caps may apply on the waiver amount",
        ]),
    )
}

fn no_fee_answer(cards: &[&CreditCard]) -> String {
    format!(
        "💰 **Credit Cards with No Annual Fee**\n\n\
         Enjoy premium benefits without yearly charges! Here are {n} excellent free cards:\n\n\
         {listing}\n\n\
         **Benefits of No Annual Fee Cards:**\n{benefits}\n\n\
         **Things to Consider:**\n{consider}\n\n\
         **Maximizing Value from Free Cards:**\n{maximize}\n\n\
         These cards prove that you don't need to pay annual fees to enjoy great credit card benefits!\n\n\
         Need help choosing the best free card for your spending pattern?",
        n = cards.len(),
        listing = summaries(cards),
        benefits = bullets(&[
            "No yearly charges means more money in your pocket",
            "Perfect for occasional credit card users",
            "Great for building credit history without costs",
            "Many offer excellent rewards and cashback",
        ]),
        consider = bullets(&[
            "While annual fee is free, other charges may apply (late payment, overlimit, etc.)",
            "Some cards waive annual fee based on spending thresholds",
            "Free cards can still offer premium benefits like rewards and offers",
            "Always read terms and conditions for any hidden charges",
        ]),
        maximize = bullets(&[
            "Use them for specific categories where they offer highest rewards",
            "Take advantage of welcome bonuses and promotional offers",
            "Combine with other cards for comprehensive coverage",
            "Pay bills and make regular purchases to earn rewards",
        ]),
    )
}

fn cashback_answer(cards: &[&CreditCard]) -> String {
    let listing = blocks(cards, |card| {
        let earning = card
            .benefit_of_kind("Cashback")
            .or_else(|| card.benefit_of_kind("Reward Points"))
            .map(|b| b.description.clone())
            .unwrap_or_else(|| format!("{}x reward points", card.reward_rate));
        let categories = [
            (card.has_audience("Online Shoppers"), "Online Shopping"),
            (card.features.fuel_surcharge_waiver, "Fuel"),
            (card.features.movie_tickets, "Entertainment"),
        ];
        let categories: Vec<&str> = categories.iter().filter(|(on, _)| *on).map(|(_, l)| *l).collect();
        format!(
            "**{}**\n• Annual Fee: {}\n• Cashback/Rewards: {}\n• Best Categories: {}\n• Target Users: {}",
            card.display_name(),
            card.annual_fee_label(),
            earning,
            join_or(&categories, "Everyday Spending"),
            card.target_audience.join(", "),
        )
    });
    format!(
        "💸 **Best Cashback & Rewards Credit Cards**\n\n\
         Earn money back on every purchase with these {n} high-earning cards:\n\n\
         {listing}\n\n\
         **Understanding Cashback vs Reward Points:**\n{explain}\n\n\
         **Maximizing Cashback Earnings:**\n{maximize}\n\n\
         **Annual Earning Potential:**\n\
         With smart usage, you can earn 2-5% back on your spending, potentially saving thousands annually!\n\n\
         Want help calculating potential earnings based on your spending pattern?",
        n = cards.len(),
        listing = listing,
        explain = bullets(&[
            "**Cashback:** Direct money credited to your account (e.g., 2% cashback = ₹2 for every ₹100 spent)",
            "**Reward Points:** Points that can be redeemed for various benefits, travel, or cash",
            "**Conversion:** Typically 1 reward point = ₹0.20 to ₹0.25",
        ]),
        maximize = bullets(&[
            "Use specific cards for their best categories (online shopping, fuel, dining)",
            "Take advantage of promotional offers and bonus categories",
            "Pay annual fees only if your earnings exceed the fee",
            "Combine multiple cards for different spending categories",
        ]),
    )
}

fn online_answer(cards: &[&CreditCard]) -> String {
    let listing = blocks(cards, |card| {
        let online = card
            .benefit_mentioning(&["online", "amazon", "flipkart"])
            .map(|b| b.description.clone())
            .unwrap_or_else(|| format!("{}x rewards on online spending", card.reward_rate));
        let offers: Vec<&str> = card.offers.iter().map(|o| o.title.as_str()).collect();
        format!(
            "**{}**\n• Annual Fee: {}\n• Online Benefits: {}\n• Special Offers: {}\n• Perfect For: {}",
            card.display_name(),
            card.annual_fee_label(),
            online,
            offers.join(", "),
            card.target_audience.join(", "),
        )
    });
    format!(
        "🛒 **Best Credit Cards for Online Shopping**\n\n\
         Shop online and earn maximum rewards with these {n} cards:\n\n\
         {listing}\n\n\
         **Why These Cards Excel for Online Shopping:**\n{why}\n\n\
         **Top Online Shopping Platforms Covered:**\n{platforms}\n\n\
         **Online Shopping Tips:**\n{tips}\n\n\
         **Security for Online Shopping:**\n{security}\n\n\
         Ready to maximize your online shopping rewards?",
        n = cards.len(),
        listing = listing,
        why = bullets(&[
            "Higher reward rates specifically for e-commerce platforms",
            "Special partnerships with major online retailers",
            "Exclusive discounts and promotional offers",
            "EMI options for large purchases",
        ]),
        platforms = bullets(&[
            "Amazon India - Special cashback and Prime benefits",
            "Flipkart - Exclusive offers and instant discounts",
            "Myntra - Fashion and lifestyle discounts",
            "BookMyShow - Movie and event ticket offers",
        ]),
        tips = bullets(&[
            "Check for platform-specific offers before purchasing",
            "Use EMI options for expensive items to manage cash flow",
            "Look for seasonal sales and festival offers",
            "Combine credit card offers with platform discounts for maximum savings",
        ]),
        security = bullets(&[
            "Always shop on secure websites (https://)",
            "Use virtual card numbers when available",
            "Monitor transactions regularly",
            "Report suspicious activity immediately",
        ]),
    )
}

/// Cards named in the message, in catalog order.
///
/// A card counts as mentioned by its full name, its name without the
/// "Credit Card" suffix, its id written with spaces ("hdfc regalia"), or by
/// the full name of its bank.
pub fn mentioned_cards<'a>(message: &str, cards: &'a [CreditCard]) -> Vec<&'a CreditCard> {
    let lowered = message.to_lowercase();
    cards
        .iter()
        .filter(|card| {
            let aliases = [
                card.name.to_lowercase(),
                card.short_name().to_lowercase(),
                card.id.replace('-', " "),
                card.bank.to_lowercase(),
            ];
            aliases
                .iter()
                .any(|alias| !alias.is_empty() && lowered.contains(alias.as_str()))
        })
        .collect()
}

/// Answer for comparison questions: a head-to-head when two or more cards are
/// named, otherwise the general guide.
pub fn comparison_answer(message: &str, cards: &[CreditCard]) -> String {
    match mentioned_cards(message, cards).as_slice() {
        [first, second, ..] => head_to_head(first, second),
        _ => comparison_guide(cards),
    }
}

fn feature_marks(card: &CreditCard) -> String {
    let mark = |on: bool, yes: &str, no: &str| if on { format!("✓ {yes}") } else { format!("✗ {no}") };
    [
        mark(card.features.lounge_access, "Lounge Access", "No Lounge"),
        mark(card.features.fuel_surcharge_waiver, "Fuel Waiver", "No Fuel Waiver"),
        mark(card.features.movie_tickets, "Movie Offers", "No Movie Offers"),
    ]
    .join(" | ")
}

fn side(card: &CreditCard) -> String {
    format!(
        "**{}:**\n• Annual Fee: {}\n• Joining Fee: {}\n• Reward Rate: {}x points\n• Credit Limit: {}\n• Key Features: {}\n• Target Audience: {}",
        card.display_name(),
        card.annual_fee_label(),
        card.joining_fee_label(),
        card.reward_rate,
        card.credit_limit,
        feature_marks(card),
        card.target_audience.join(", "),
    )
}

fn head_to_head(a: &CreditCard, b: &CreditCard) -> String {
    let lounge_edge = match (a.features.lounge_access, b.features.lounge_access) {
        (true, false) => Some(a),
        (false, true) => Some(b),
        _ => None,
    };
    let premium_line = lounge_edge
        .map(|c| format!("{} has lounge access advantage", c.name))
        .unwrap_or_else(|| "Both similar in premium features".to_string());
    let cheaper = if a.annual_fee < b.annual_fee { a } else { b };
    let richer = if a.reward_rate > b.reward_rate { a } else { b };

    let mut recommendation = vec![
        format!("Choose {} if you want lower costs", cheaper.name),
        format!("Choose {} if you want higher rewards", richer.name),
    ];
    if let Some(traveller) = lounge_edge {
        recommendation.push(format!("Choose {} if you travel frequently", traveller.name));
    }

    let cost = |card: &CreditCard, zero: &str| {
        if card.annual_fee == 0 {
            zero.to_string()
        } else {
            fee_label(card.annual_fee)
        }
    };

    format!(
        "🔍 **Detailed Comparison: {a_full} vs {b_full}**\n\n\
         {a_side}\n\n\
         {b_side}\n\n\
         **Key Differences:**\n\
         • **Cost:** {a_name} costs {a_cost} annually vs {b_name} at {b_cost}\n\
         • **Rewards:** {a_name} offers {a_rate}x vs {b_name} at {b_rate}x\n\
         • **Premium Features:** {premium}\n\n\
         **My Recommendation:**\n\
         {recommendation}\n\n\
         Need help deciding based on your specific needs and spending pattern?",
        a_full = a.display_name(),
        b_full = b.display_name(),
        a_side = side(a),
        b_side = side(b),
        a_name = a.name,
        b_name = b.name,
        a_cost = cost(a, "nothing"),
        b_cost = cost(b, "free"),
        a_rate = a.reward_rate,
        b_rate = b.reward_rate,
        premium = premium_line,
        recommendation = recommendation.join("\n"),
    )
}

fn comparison_guide(cards: &[CreditCard]) -> String {
    let listing = cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            format!(
                "{}. **{}** - {} annual fee, {}x rewards",
                i + 1,
                card.display_name(),
                card.annual_fee_label(),
                card.reward_rate
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "🔍 **Credit Card Comparison Guide**\n\n\
         I can help you compare any credit cards! Here are all the cards available for comparison:\n\n\
         {listing}\n\n\
         **How to Compare Credit Cards:**\n\n\
         **1. Cost Analysis:**\n{cost}\n\n\
         **2. Rewards & Benefits:**\n{rewards}\n\n\
         **3. Features & Services:**\n{features}\n\n\
         **4. Acceptance & Convenience:**\n{acceptance}\n\n\
         **5. Target Suitability:**\n{suitability}\n\n\
         **Popular Comparisons:**\n{popular}\n\n\
         Tell me which specific cards you'd like me to compare, and I'll provide a detailed analysis!",
        listing = listing,
        cost = bullets(&[
            "Annual and joining fees",
            "Interest rates and other charges",
            "Fee waiver conditions",
        ]),
        rewards = bullets(&[
            "Reward rates for different categories",
            "Cashback percentages",
            "Welcome bonuses and milestone benefits",
        ]),
        features = bullets(&[
            "Airport lounge access",
            "Fuel surcharge waiver",
            "Movie and dining offers",
            "Insurance coverage",
        ]),
        acceptance = bullets(&[
            "Network coverage (Visa/Mastercard)",
            "Online and offline acceptance",
            "Mobile app and digital features",
        ]),
        suitability = bullets(&["Income requirements", "Spending patterns", "Lifestyle preferences"]),
        popular = bullets(&[
            "HDFC Regalia vs Axis Magnus (Premium travel cards)",
            "Amazon Pay vs Flipkart Card (Online shopping)",
            "SBI SimplyCLICK vs HDFC Millennia (Digital lifestyle)",
        ]),
    )
}

fn travel_answer(cards: &[&CreditCard]) -> String {
    let listing = blocks(cards, |card| {
        let perks = [
            (card.features.lounge_access, "Airport Lounge Access"),
            (card.features.insurance_cover, "Travel Insurance"),
            (card.features.fuel_surcharge_waiver, "Fuel Savings"),
        ];
        let perks: Vec<&str> = perks.iter().filter(|(on, _)| *on).map(|(_, l)| *l).collect();
        let offers: Vec<&str> = card.offers.iter().take(2).map(|o| o.title.as_str()).collect();
        format!(
            "**{}**\n• Annual Fee: {}\n• Travel Benefits: {}\n• Reward Rate: {}x points on travel spending\n• Additional Perks: {}\n• Best For: {}",
            card.display_name(),
            card.annual_fee_label(),
            join_or(&perks, "Standard travel features"),
            card.reward_rate,
            offers.join(", "),
            card.target_audience.join(", "),
        )
    });
    format!(
        "✈️ **Best Credit Cards for Travel**\n\n\
         Make your travels more rewarding and comfortable with these {n} travel-focused cards:\n\n\
         {listing}\n\n\
         **Why These Cards Are Perfect for Travelers:**\n\n\
         **Airport Lounge Access:**\n{lounge}\n\n\
         **Travel Insurance Benefits:**\n{insurance}\n\n\
         **Additional Travel Perks:**\n{perks}\n\n\
         **Travel Reward Strategies:**\n{strategies}\n\n\
         **International Travel Tips:**\n{tips}\n\n\
         Planning a trip? Let me help you choose the perfect travel companion card!",
        n = cards.len(),
        listing = listing,
        lounge = bullets(&[
            "Comfortable waiting areas with complimentary food and drinks",
            "Free Wi-Fi and charging stations",
            "Quiet environment away from crowded terminals",
            "Available at domestic and international airports",
        ]),
        insurance = bullets(&[
            "Coverage for trip cancellations and delays",
            "Lost baggage protection",
            "Medical emergency coverage abroad",
            "24/7 travel assistance hotline",
        ]),
        perks = bullets(&[
            "Priority check-in and boarding (with some premium cards)",
            "Hotel and car rental discounts",
            "Foreign exchange rate benefits",
            "No foreign transaction fees (varies by card)",
        ]),
        strategies = bullets(&[
            "Use travel cards for all trip-related expenses",
            "Book flights and hotels through card portals for bonus points",
            "Take advantage of seasonal travel offers",
            "Combine points across different spending categories",
        ]),
        tips = bullets(&[
            "Inform your bank about travel plans to avoid card blocks",
            "Carry backup payment methods",
            "Understand foreign transaction fees",
            "Use airport lounges to enhance travel experience",
        ]),
    )
}

fn premium_answer(cards: &[&CreditCard]) -> String {
    format!(
        "👑 **Premium & Luxury Credit Cards**\n\n\
         Experience the finest in credit card benefits with these {n} premium options:\n\n\
         {listing}\n\n\
         **What Makes These Cards Premium:**\n\n\
         **Exclusive Benefits:**\n{exclusive}\n\n\
         **Luxury Partnerships:**\n{partnerships}\n\n\
         **Enhanced Rewards:**\n{rewards}\n\n\
         **Travel & Lifestyle:**\n{lifestyle}\n\n\
         **Investment in Premium Cards:**\n\
         While these cards have higher annual fees, they're designed for high spenders who can maximize the benefits. The key is ensuring your spending and lifestyle align with the card's offerings.\n\n\
         **ROI Calculation:**\n{roi}\n\n\
         **Who Should Consider Premium Cards:**\n{who}\n\n\
         Ready to elevate your credit card experience to premium status?",
        n = cards.len(),
        listing = summaries(cards),
        exclusive = bullets(&[
            "Unlimited or extensive airport lounge access",
            "Concierge services for travel and lifestyle needs",
            "Priority customer service with dedicated relationship managers",
            "Exclusive event invitations and experiences",
        ]),
        partnerships = bullets(&[
            "Premium hotel and resort privileges",
            "Fine dining restaurant discounts and reservations",
            "Luxury brand shopping offers and early access",
            "Golf course access and privileges",
        ]),
        rewards = bullets(&[
            "Higher earning rates on premium spending categories",
            "Accelerated points on luxury purchases",
            "Milestone bonuses for high spending",
            "Premium redemption options including travel and experiences",
        ]),
        lifestyle = bullets(&[
            "Comprehensive travel insurance coverage",
            "Airport transfer services and priority services",
            "Spa and wellness center access",
            "Personal shopping and lifestyle assistance",
        ]),
        roi = bullets(&[
            "Premium cards typically require ₹5-10 lakhs annual spending to justify fees",
            "Benefits often exceed annual fees for frequent travelers",
            "Lifestyle perks add intangible value beyond monetary benefits",
        ]),
        who = bullets(&[
            "Frequent business and leisure travelers",
            "High-income professionals with substantial spending",
            "Individuals who value luxury experiences and convenience",
            "Those who can utilize multiple card benefits regularly",
        ]),
    )
}

/// Per-bank line of the welcome answer: "🏦 **HDFC Bank:** 2 cards (Regalia, Millennia)".
fn bank_lines(cards: &[CreditCard]) -> String {
    let mut banks: Vec<&str> = Vec::new();
    for card in cards {
        if !banks.contains(&card.bank.as_str()) {
            banks.push(&card.bank);
        }
    }
    banks
        .iter()
        .map(|bank| {
            let names: Vec<&str> = cards
                .iter()
                .filter(|c| c.bank == *bank)
                .map(CreditCard::short_name)
                .collect();
            let noun = if names.len() == 1 { "card" } else { "cards" };
            format!("🏦 **{bank}:** {} {noun} ({})", names.len(), names.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn welcome_answer(cards: &[CreditCard]) -> String {
    format!(
        "👋 **Welcome to CardCompare India!**\n\n\
         I'm your AI assistant with comprehensive knowledge of all {n} credit cards in our database. I can help you with detailed information about:\n\n\
         **Available Credit Cards by Bank:**\n{banks}\n\n\
         **What I Can Help You With:**\n\n\
         🎯 **Specific Queries:**\n{queries}\n\n\
         💡 **Detailed Analysis:**\n{analysis}\n\n\
         🔍 **Smart Comparisons:**\n{comparisons}\n\n\
         📊 **Categories I Cover:**\n{categories}\n\n\
         **Just ask me anything!** I understand natural language, so you can ask questions like:\n{examples}\n\n\
         What would you like to know about credit cards today? 🤔",
        n = cards.len(),
        banks = bank_lines(cards),
        queries = bullets(&[
            "\"Tell me about HDFC Regalia card\"",
            "\"Which cards have lounge access?\"",
            "\"Best cards for students\"",
            "\"Compare Axis Magnus vs HDFC Regalia\"",
            "\"Cards with no annual fee\"",
        ]),
        analysis = bullets(&[
            "Complete card features and benefits",
            "Annual fees, joining fees, and charges",
            "Reward rates and cashback percentages",
            "Eligibility criteria and target audience",
            "Pros and cons of each card",
        ]),
        comparisons = bullets(&[
            "Side-by-side feature comparisons",
            "Cost-benefit analysis",
            "Recommendations based on your needs",
            "Best cards for specific use cases",
        ]),
        categories = bullets(&[
            "Student and beginner-friendly cards",
            "Premium and luxury cards",
            "Travel-focused cards with lounge access",
            "Cashback and rewards cards",
            "Online shopping specialist cards",
            "Fuel surcharge waiver cards",
            "Zero annual fee cards",
        ]),
        examples = bullets(&[
            "\"What's the best card for someone who travels a lot?\"",
            "\"I'm a student, which card should I get?\"",
            "\"Show me all free credit cards\"",
            "\"Which bank has the best premium cards?\"",
        ]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_cards;

    /// Headings of every card block ("**Bank Name**") in order of appearance.
    fn listed_cards(text: &str) -> Vec<String> {
        text.lines()
            .filter(|l| l.starts_with("**") && l.ends_with("**") && !l.ends_with(":**"))
            .map(|l| l.trim_matches('*').to_string())
            .collect()
    }

    #[test]
    fn hdfc_lists_exactly_its_two_cards() {
        let cards = seed_cards();
        let reply = RuleBasedResponder::default().respond("hdfc", &cards);
        assert!(reply.starts_with("🏦 **HDFC Bank Credit Cards**"));
        assert!(reply.contains("HDFC Bank offers 2 excellent credit cards"));
        assert_eq!(
            listed_cards(&reply),
            vec!["HDFC Bank Regalia Credit Card", "HDFC Bank Millennia Credit Card"]
        );
    }

    #[test]
    fn bank_question_with_lounge_keyword_stays_on_bank() {
        let cards = seed_cards();
        let reply = RuleBasedResponder::default().respond("Does HDFC have lounge access cards?", &cards);
        assert!(reply.starts_with("🏦 **HDFC Bank Credit Cards**"));
        assert!(!reply.contains("Credit Cards with Airport Lounge Access"));
    }

    #[test]
    fn no_annual_fee_lists_only_amazon_pay() {
        let cards = seed_cards();
        let reply = RuleBasedResponder::default().respond("no annual fee", &cards);
        assert!(reply.contains("Here are 1 excellent free cards"));
        assert_eq!(listed_cards(&reply), vec!["ICICI Bank Amazon Pay ICICI Credit Card"]);
        assert!(reply.contains("• Annual Fee: Free"));
    }

    #[test]
    fn named_cards_get_a_head_to_head() {
        let cards = seed_cards();
        let reply = comparison_answer("compare hdfc regalia and axis magnus", &cards);
        assert!(reply.starts_with(
            "🔍 **Detailed Comparison: HDFC Bank Regalia Credit Card vs Axis Bank Magnus Credit Card**"
        ));
        assert!(reply.contains("Regalia Credit Card costs ₹2,500 annually vs Magnus Credit Card at ₹10,000"));
        assert!(reply.contains("Choose Regalia Credit Card if you want lower costs"));
        assert!(reply.contains("Choose Magnus Credit Card if you want higher rewards"));
        assert!(reply.contains("Both similar in premium features"));
        assert!(!reply.contains("Comparison Guide"));
    }

    #[test]
    fn mention_detection_uses_short_names_and_ids() {
        let cards = seed_cards();
        let ids = |m: &str| -> Vec<String> {
            mentioned_cards(m, &cards).into_iter().map(|c| c.id.clone()).collect()
        };
        assert_eq!(ids("compare hdfc regalia and axis magnus"), vec!["hdfc-regalia", "axis-magnus"]);
        assert_eq!(ids("Coral versus SimplyCLICK"), vec!["sbi-simply-click", "icici-coral"]);
        assert_eq!(ids("difference inside ICICI Bank"), vec!["icici-amazon-pay", "icici-coral"]);
        assert!(ids("compare cards").is_empty());
    }

    #[test]
    fn lounge_edge_drives_travel_recommendation() {
        let cards = seed_cards();
        let reply = comparison_answer("coral vs sbi elite", &cards);
        assert!(reply.contains("Detailed Comparison: SBI Card SBI Card ELITE vs ICICI Bank Coral Credit Card"));
        assert!(reply.contains("SBI Card ELITE has lounge access advantage"));
        assert!(reply.contains("Choose SBI Card ELITE if you travel frequently"));
        assert!(reply.contains("Choose Coral Credit Card if you want lower costs"));
    }

    #[test]
    fn single_mention_falls_back_to_guide() {
        let cards = seed_cards();
        let reply = comparison_answer("compare regalia", &cards);
        assert!(reply.starts_with("🔍 **Credit Card Comparison Guide**"));
        for (i, card) in cards.iter().enumerate() {
            assert!(reply.contains(&format!("{}. **{}**", i + 1, card.display_name())));
        }
        assert!(reply.contains("**ICICI Bank Amazon Pay ICICI Credit Card** - Free annual fee"));
    }

    #[test]
    fn unknown_input_welcomes_with_counts() {
        let cards = seed_cards();
        let reply = RuleBasedResponder::default().respond("asdkjasd", &cards);
        assert!(reply.contains("all 8 credit cards"));
        assert!(reply.contains("🏦 **HDFC Bank:** 2 cards (Regalia, Millennia)"));
        assert!(reply.contains("🏦 **Axis Bank:** 2 cards (Magnus, Flipkart Axis Bank)"));
        assert!(reply.contains("🏦 **SBI Card:** 2 cards (SimplyCLICK, SBI Card ELITE)"));
        assert!(reply.contains("🏦 **ICICI Bank:** 2 cards (Amazon Pay ICICI, Coral)"));
    }

    #[test]
    fn empty_input_is_welcome() {
        let cards = seed_cards();
        let reply = RuleBasedResponder::default().respond("", &cards);
        assert!(reply.starts_with("👋 **Welcome to CardCompare India!**"));
    }

    #[test]
    fn replies_are_deterministic() {
        let cards = seed_cards();
        let responder = RuleBasedResponder::default();
        for message in ["hdfc", "lounge", "fuel", "travel", "premium", "compare", "???"] {
            assert_eq!(responder.respond(message, &cards), responder.respond(message, &cards));
        }
    }

    #[test]
    fn card_summary_lists_highlighted_features_and_top_benefits() {
        let cards = seed_cards();
        let summary = card_summary(&cards[0]);
        assert!(summary.contains("• Annual Fee: ₹2,500"));
        assert!(summary.contains("• Joining Fee: ₹1,000"));
        assert!(summary.contains("• Reward Rate: 4x points per transaction"));
        assert!(summary.contains(
            "• Key Features: Lounge Access, Fuel Surcharge Waiver, Movie Offers, Insurance Cover"
        ));
        assert!(!summary.contains("Milestone Benefit"));

        let amazon = &cards[3];
        assert!(amazon.features.enabled().contains(Feature::Contactless));
        assert!(card_summary(amazon).contains("• Key Features: Standard features"));
    }

    #[test]
    fn lounge_answer_shows_lounge_allowance() {
        let cards = seed_cards();
        let reply = RuleBasedResponder::default().respond("airport lounge", &cards);
        assert!(reply.contains("I found 3 cards"));
        assert!(reply.contains("• Lounge Access: Unlimited domestic, 6 international per year"));
        assert!(reply.contains("• Lounge Access: 8 domestic, 6 international per year"));
    }

    #[test]
    fn fuel_answer_uses_fuel_benefit_value() {
        let cards = seed_cards();
        let reply = RuleBasedResponder::default().respond("petrol", &cards);
        assert!(reply.contains("these 7 cards"));
        assert!(reply.contains("• Fuel Savings: 100%"));
        assert!(!reply.contains("Amazon Pay"));
    }

    #[tokio::test]
    async fn generator_impl_never_fails() {
        let cards = seed_cards();
        let responder = RuleBasedResponder::default();
        let reply = responder.chat_reply("student", &cards).await.expect("rule path is infallible");
        assert!(reply.starts_with("🎓 **Best Credit Cards for Students & Beginners**"));
        let report = responder.compare_analysis(&[]).await.expect("rule path is infallible");
        assert!(!report.is_empty());
    }
}
