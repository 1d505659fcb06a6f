//! インフルエンサーのスタイル・オーディエンスのラベル定義
//!
//! 入力フォームの選択肢と同じ固定セット。ラベル文字列はそのまま
//! JSONやメッセージに現れるため、`as_str` の表記を変えないこと。

use std::fmt;
use std::str::FromStr;

/// インフルエンサーのスタイル（10種）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfluencerStyle {
    Minimalist,
    ColorfulVibrant,
    LuxuryPremium,
    CasualRelaxed,
    ArtisticCreative,
    ProfessionalCorporate,
    VintageRetro,
    NaturalOrganic,
    EdgyAlternative,
    PlayfulFun,
}

impl InfluencerStyle {
    /// フォームの表示順
    pub const ALL: [InfluencerStyle; 10] = [
        InfluencerStyle::Minimalist,
        InfluencerStyle::ColorfulVibrant,
        InfluencerStyle::LuxuryPremium,
        InfluencerStyle::CasualRelaxed,
        InfluencerStyle::ArtisticCreative,
        InfluencerStyle::ProfessionalCorporate,
        InfluencerStyle::VintageRetro,
        InfluencerStyle::NaturalOrganic,
        InfluencerStyle::EdgyAlternative,
        InfluencerStyle::PlayfulFun,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InfluencerStyle::Minimalist => "Minimalist",
            InfluencerStyle::ColorfulVibrant => "Colorful/Vibrant",
            InfluencerStyle::LuxuryPremium => "Luxury/Premium",
            InfluencerStyle::CasualRelaxed => "Casual/Relaxed",
            InfluencerStyle::ArtisticCreative => "Artistic/Creative",
            InfluencerStyle::ProfessionalCorporate => "Professional/Corporate",
            InfluencerStyle::VintageRetro => "Vintage/Retro",
            InfluencerStyle::NaturalOrganic => "Natural/Organic",
            InfluencerStyle::EdgyAlternative => "Edgy/Alternative",
            InfluencerStyle::PlayfulFun => "Playful/Fun",
        }
    }

    /// 完全一致でラベルを解決（未知のラベルは None）
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == label)
    }
}

impl fmt::Display for InfluencerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InfluencerStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown style: {}", s))
    }
}

/// インフルエンサーの主なオーディエンス（12種）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfluencerAudience {
    GenZ,
    Millennials,
    GenX,
    BabyBoomers,
    FashionEnthusiasts,
    FitnessWellness,
    BeautyLovers,
    TechEnthusiasts,
    Foodies,
    Travelers,
    EcoConscious,
    LuxuryShoppers,
}

impl InfluencerAudience {
    pub const ALL: [InfluencerAudience; 12] = [
        InfluencerAudience::GenZ,
        InfluencerAudience::Millennials,
        InfluencerAudience::GenX,
        InfluencerAudience::BabyBoomers,
        InfluencerAudience::FashionEnthusiasts,
        InfluencerAudience::FitnessWellness,
        InfluencerAudience::BeautyLovers,
        InfluencerAudience::TechEnthusiasts,
        InfluencerAudience::Foodies,
        InfluencerAudience::Travelers,
        InfluencerAudience::EcoConscious,
        InfluencerAudience::LuxuryShoppers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InfluencerAudience::GenZ => "Gen Z",
            InfluencerAudience::Millennials => "Millennials",
            InfluencerAudience::GenX => "Gen X",
            InfluencerAudience::BabyBoomers => "Baby Boomers",
            InfluencerAudience::FashionEnthusiasts => "Fashion Enthusiasts",
            InfluencerAudience::FitnessWellness => "Fitness & Wellness",
            InfluencerAudience::BeautyLovers => "Beauty Lovers",
            InfluencerAudience::TechEnthusiasts => "Tech Enthusiasts",
            InfluencerAudience::Foodies => "Foodies",
            InfluencerAudience::Travelers => "Travelers",
            InfluencerAudience::EcoConscious => "Eco-Conscious",
            InfluencerAudience::LuxuryShoppers => "Luxury Shoppers",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.as_str() == label)
    }
}

impl fmt::Display for InfluencerAudience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InfluencerAudience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown audience: {}", s))
    }
}
