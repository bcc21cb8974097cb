//! Seed data for the card catalog. Loaded once at start and never mutated.

use crate::models::{BenefitValue, CardBenefit, CardFeatures, CardOffer, CreditCard};

fn benefit(kind: &str, description: &str, value: Option<BenefitValue>) -> CardBenefit {
    CardBenefit {
        kind: kind.to_string(),
        description: description.to_string(),
        value,
    }
}

fn num(n: f64) -> Option<BenefitValue> {
    Some(BenefitValue::Number(n))
}

fn text(s: &str) -> Option<BenefitValue> {
    Some(BenefitValue::Text(s.to_string()))
}

fn offer(title: &str, description: &str, valid_until: &str) -> CardOffer {
    CardOffer {
        title: title.to_string(),
        description: description.to_string(),
        valid_until: Some(valid_until.to_string()),
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Feature flags shared by the premium travel cards.
fn premium_features() -> CardFeatures {
    CardFeatures {
        lounge_access: true,
        fuel_surcharge_waiver: true,
        movie_tickets: true,
        international_acceptance: true,
        contactless: true,
        mobile_wallet_compatible: true,
        emi_options: true,
        insurance_cover: true,
    }
}

/// Baseline flags for entry-level cards; callers switch on the extras.
fn entry_features(fuel_surcharge_waiver: bool, movie_tickets: bool) -> CardFeatures {
    CardFeatures {
        lounge_access: false,
        fuel_surcharge_waiver,
        movie_tickets,
        international_acceptance: true,
        contactless: true,
        mobile_wallet_compatible: true,
        emi_options: true,
        insurance_cover: false,
    }
}

/// The built-in catalog in declaration order.
pub fn seed_cards() -> Vec<CreditCard> {
    vec![
        CreditCard {
            id: "hdfc-regalia".into(),
            name: "Regalia Credit Card".into(),
            bank: "HDFC Bank".into(),
            bank_logo: "/images/hdfc-logo.png".into(),
            card_image: "/images/hdfc-regalia-card.png".into(),
            annual_fee: 2500,
            joining_fee: 1000,
            reward_rate: 4.0,
            credit_limit: "₹5,00,000 - ₹10,00,000".into(),
            interest_rate: "3.49% per month".into(),
            benefits: vec![
                benefit("Reward Points", "Earn 4 reward points for every ₹150 spent", num(4.0)),
                benefit(
                    "Lounge Access",
                    "Complimentary access to domestic and international airport lounges",
                    text("Unlimited domestic, 6 international per year"),
                ),
                benefit(
                    "Fuel Surcharge Waiver",
                    "1% fuel surcharge waiver on transactions between ₹400 - ₹5,000",
                    text("1%"),
                ),
                benefit(
                    "Milestone Benefit",
                    "10,000 bonus reward points on spending ₹5,00,000 in a year",
                    num(10000.0),
                ),
            ],
            offers: vec![
                offer(
                    "Amazon Prime Membership",
                    "Complimentary annual Amazon Prime membership",
                    "2024-12-31",
                ),
                offer(
                    "BookMyShow Offer",
                    "Buy 1 Get 1 movie ticket free on BookMyShow, up to 2 times per month",
                    "2024-12-31",
                ),
            ],
            target_audience: tags(&["Premium", "Travel", "Lifestyle"]),
            summary: Some("The HDFC Regalia is a premium travel credit card offering excellent lounge benefits, reward points, and lifestyle privileges for frequent travelers and high spenders.".into()),
            features: premium_features(),
        },
        CreditCard {
            id: "axis-magnus".into(),
            name: "Magnus Credit Card".into(),
            bank: "Axis Bank".into(),
            bank_logo: "/images/axis-logo.png".into(),
            card_image: "/images/axis-magnus-card.png".into(),
            annual_fee: 10000,
            joining_fee: 5000,
            reward_rate: 5.0,
            credit_limit: "₹8,00,000 - ₹15,00,000".into(),
            interest_rate: "3.4% per month".into(),
            benefits: vec![
                benefit("Reward Points", "Earn 5 EDGE reward points for every ₹200 spent", num(5.0)),
                benefit(
                    "Lounge Access",
                    "Unlimited complimentary access to domestic and international airport lounges",
                    text("Unlimited"),
                ),
                benefit("Fuel Surcharge Waiver", "Complete waiver on fuel surcharge", text("100%")),
                benefit(
                    "Golf Privileges",
                    "Complimentary golf games at top courses across India",
                    text("12 games per year"),
                ),
            ],
            offers: vec![
                offer(
                    "Taj Hotels Privilege",
                    "Complimentary one-night stay at select Taj properties annually",
                    "2024-12-31",
                ),
                offer(
                    "Wine & Dine Program",
                    "Up to 25% savings at partner restaurants across India",
                    "2024-12-31",
                ),
            ],
            target_audience: tags(&["Super Premium", "Travel", "Lifestyle", "Luxury"]),
            summary: Some("The Axis Magnus is a super-premium credit card designed for the elite, offering unlimited lounge access, high reward rates, and exclusive lifestyle and travel benefits.".into()),
            features: premium_features(),
        },
        CreditCard {
            id: "sbi-simply-click".into(),
            name: "SimplyCLICK Credit Card".into(),
            bank: "SBI Card".into(),
            bank_logo: "/images/sbi-logo.png".into(),
            card_image: "/images/sbi-simplyclick-card.png".into(),
            annual_fee: 499,
            joining_fee: 499,
            reward_rate: 10.0,
            credit_limit: "₹1,00,000 - ₹3,00,000".into(),
            interest_rate: "3.35% per month".into(),
            benefits: vec![
                benefit(
                    "Reward Points",
                    "10X reward points on online spending at Amazon, BookMyShow, Cleartrip, etc.",
                    num(10.0),
                ),
                benefit("Welcome Benefit", "₹500 Amazon gift voucher on card activation", num(500.0)),
                benefit(
                    "Fuel Surcharge Waiver",
                    "1% fuel surcharge waiver on transactions between ₹500 - ₹3,000",
                    text("1%"),
                ),
            ],
            offers: vec![
                offer(
                    "Annual Fee Waiver",
                    "Annual fee waived on spending ₹1,00,000 in the previous year",
                    "Ongoing",
                ),
                offer("Cleartrip Offer", "5% cashback on Cleartrip bookings", "2024-12-31"),
            ],
            target_audience: tags(&["Online Shoppers", "First-time Users", "Students"]),
            summary: Some("The SBI SimplyCLICK is an online shopping-focused card with high reward rates on e-commerce platforms, making it ideal for digital-first consumers with moderate spending habits.".into()),
            features: entry_features(true, false),
        },
        CreditCard {
            id: "icici-amazon-pay".into(),
            name: "Amazon Pay ICICI Credit Card".into(),
            bank: "ICICI Bank".into(),
            bank_logo: "/images/icici-logo.png".into(),
            card_image: "/images/icici-amazon-card.png".into(),
            annual_fee: 0,
            joining_fee: 0,
            reward_rate: 5.0,
            credit_limit: "₹1,00,000 - ₹5,00,000".into(),
            interest_rate: "3.5% per month".into(),
            benefits: vec![
                benefit(
                    "Cashback",
                    "5% cashback on Amazon.in purchases for Prime members, 3% for non-Prime",
                    text("5%"),
                ),
                benefit(
                    "Cashback",
                    "2% cashback on payments at Amazon Pay partner merchants",
                    text("2%"),
                ),
                benefit("Cashback", "1% cashback on all other payments", text("1%")),
            ],
            offers: vec![
                offer("Welcome Benefit", "₹500 Amazon Pay balance as welcome gift", "Ongoing"),
                offer("No-cost EMI", "No-cost EMI on Amazon.in purchases", "Ongoing"),
            ],
            target_audience: tags(&["Amazon Shoppers", "First-time Users", "Online Shoppers"]),
            summary: Some("The Amazon Pay ICICI Credit Card offers excellent cashback benefits for Amazon shoppers with no annual fees, making it a great choice for regular Amazon customers.".into()),
            features: entry_features(false, false),
        },
        CreditCard {
            id: "hdfc-millennia".into(),
            name: "Millennia Credit Card".into(),
            bank: "HDFC Bank".into(),
            bank_logo: "/images/hdfc-logo.png".into(),
            card_image: "/images/hdfc-millennia-card.png".into(),
            annual_fee: 1000,
            joining_fee: 1000,
            reward_rate: 2.0,
            credit_limit: "₹1,50,000 - ₹4,00,000".into(),
            interest_rate: "3.49% per month".into(),
            benefits: vec![
                benefit("Cashback", "5% cashback on online spends", text("5%")),
                benefit("Cashback", "2.5% cashback on wallet loads and bill payments", text("2.5%")),
                benefit("Cashback", "1% cashback on all other spends", text("1%")),
                benefit(
                    "Fuel Surcharge Waiver",
                    "1% fuel surcharge waiver on transactions between ₹400 - ₹5,000",
                    text("1%"),
                ),
            ],
            offers: vec![
                offer(
                    "Annual Fee Waiver",
                    "Annual fee waived on spending ₹1,00,000 in the previous year",
                    "Ongoing",
                ),
                offer(
                    "Movie Offer",
                    "25% off on movie tickets on BookMyShow (up to ₹200)",
                    "2024-12-31",
                ),
            ],
            target_audience: tags(&["Millennials", "Digital Natives", "First-time Users"]),
            summary: Some("The HDFC Millennia Credit Card is designed for digital-first millennials, offering strong cashback on online spending, wallet loads, and everyday transactions.".into()),
            features: entry_features(true, true),
        },
        CreditCard {
            id: "axis-flipkart".into(),
            name: "Flipkart Axis Bank Credit Card".into(),
            bank: "Axis Bank".into(),
            bank_logo: "/images/axis-logo.png".into(),
            card_image: "/images/axis-flipkart-card.png".into(),
            annual_fee: 500,
            joining_fee: 500,
            reward_rate: 4.0,
            credit_limit: "₹1,00,000 - ₹5,00,000".into(),
            interest_rate: "3.4% per month".into(),
            benefits: vec![
                benefit(
                    "Cashback",
                    "5% unlimited cashback on Flipkart, Myntra and Cleartrip",
                    text("5%"),
                ),
                benefit("Cashback", "4% unlimited cashback on preferred partners", text("4%")),
                benefit("Cashback", "1.5% unlimited cashback on all other spends", text("1.5%")),
                benefit(
                    "Fuel Surcharge Waiver",
                    "1% fuel surcharge waiver on transactions between ₹400 - ₹4,000",
                    text("1%"),
                ),
            ],
            offers: vec![
                offer(
                    "Welcome Benefit",
                    "₹500 Flipkart voucher on first transaction within 30 days",
                    "Ongoing",
                ),
                offer(
                    "Annual Fee Waiver",
                    "Annual fee waived on spending ₹2,00,000 in the previous year",
                    "Ongoing",
                ),
            ],
            target_audience: tags(&["Online Shoppers", "Flipkart Customers", "First-time Users"]),
            summary: Some("The Flipkart Axis Bank Credit Card offers excellent cashback benefits for Flipkart shoppers and provides good value across various spending categories.".into()),
            features: entry_features(true, false),
        },
        CreditCard {
            id: "sbi-elite".into(),
            name: "SBI Card ELITE".into(),
            bank: "SBI Card".into(),
            bank_logo: "/images/sbi-logo.png".into(),
            card_image: "/images/sbi-elite-card.png".into(),
            annual_fee: 4999,
            joining_fee: 4999,
            reward_rate: 5.0,
            credit_limit: "₹4,00,000 - ₹8,00,000".into(),
            interest_rate: "3.35% per month".into(),
            benefits: vec![
                benefit("Reward Points", "5 reward points for every ₹100 spent", num(5.0)),
                benefit(
                    "Lounge Access",
                    "Complimentary access to domestic and international airport lounges",
                    text("8 domestic, 6 international per year"),
                ),
                benefit(
                    "Milestone Benefit",
                    "10,000 bonus reward points on spending ₹5,00,000 in a year",
                    num(10000.0),
                ),
                benefit("Fuel Surcharge Waiver", "Complete waiver on fuel surcharge", text("100%")),
            ],
            offers: vec![
                offer(
                    "Taj Experiences Gift Voucher",
                    "Complimentary Taj Experiences Gift Voucher worth ₹10,000 on spending ₹8,00,000 in a year",
                    "2024-12-31",
                ),
                offer(
                    "Movie Offer",
                    "Buy 1 Get 1 movie ticket free on BookMyShow, up to 2 times per month",
                    "2024-12-31",
                ),
            ],
            target_audience: tags(&["Premium", "Travel", "Lifestyle"]),
            summary: Some("The SBI Card ELITE is a premium travel and lifestyle credit card offering excellent lounge access, high reward rates, and premium lifestyle benefits for frequent travelers.".into()),
            features: premium_features(),
        },
        CreditCard {
            id: "icici-coral".into(),
            name: "Coral Credit Card".into(),
            bank: "ICICI Bank".into(),
            bank_logo: "/images/icici-logo.png".into(),
            card_image: "/images/icici-coral-card.png".into(),
            annual_fee: 500,
            joining_fee: 500,
            reward_rate: 2.0,
            credit_limit: "₹1,00,000 - ₹3,00,000".into(),
            interest_rate: "3.5% per month".into(),
            benefits: vec![
                benefit("Reward Points", "2 reward points for every ₹100 spent", num(2.0)),
                benefit(
                    "Fuel Surcharge Waiver",
                    "1% fuel surcharge waiver on transactions between ₹500 - ₹4,000",
                    text("1%"),
                ),
                benefit("Dining", "15% discount at select restaurants", text("15%")),
            ],
            offers: vec![
                offer(
                    "Annual Fee Waiver",
                    "Annual fee waived on spending ₹1,50,000 in the previous year",
                    "Ongoing",
                ),
                offer("Welcome Benefit", "1,000 bonus reward points on first transaction", "Ongoing"),
            ],
            target_audience: tags(&["First-time Users", "Students", "Young Professionals"]),
            summary: Some("The ICICI Coral Credit Card is an entry-level card with decent rewards and benefits, making it suitable for first-time credit card users and young professionals.".into()),
            features: entry_features(true, false),
        },
    ]
}
