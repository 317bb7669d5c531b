//! Storefront categories and the keyword table used to bucket scraped
//! products into them.

use serde::{Deserialize, Serialize};

/// Navigation category of the storefront. The discriminant is the id stored
/// with the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Category {
    Hardware = 1,
    Peripherals = 2,
    Computers = 3,
    Games = 4,
    Mobile = 5,
    TvAudio = 6,
    Speakers = 7,
    GamerFurniture = 8,
    SmartHome = 9,
    Power = 10,
}

/// Catch-all bucket for names no keyword matches.
pub const DEFAULT_CATEGORY: Category = Category::Peripherals;

/// Ordered `(category, keywords)` table.
///
/// Order is the tie-break: a name matching keywords from two rows lands in
/// the row declared first. Matching is plain substring search on the
/// lower-cased name, so `"hd"` also hits `"hdmi"`.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Peripherals,
        &["mouse", "teclado", "headset", "fone", "webcam", "microfone"],
    ),
    (
        Category::Hardware,
        &[
            "processador",
            "placa de vídeo",
            "memória ram",
            "ssd",
            "hd",
            "fonte",
        ],
    ),
    (
        Category::Computers,
        &["notebook", "desktop", "pc", "computador", "all in one"],
    ),
    (
        Category::Games,
        &[
            "console",
            "playstation",
            "xbox",
            "nintendo",
            "controle",
            "joystick",
        ],
    ),
    (
        Category::Mobile,
        &["celular", "smartphone", "iphone", "galaxy", "xiaomi"],
    ),
    (
        Category::TvAudio,
        &["tv", "televisão", "smart tv", "soundbar", "home theater"],
    ),
    (
        Category::Speakers,
        &["caixa de som", "alto-falante", "speaker", "jbl"],
    ),
    (
        Category::GamerFurniture,
        &["cadeira gamer", "mesa gamer", "suporte monitor"],
    ),
    (
        Category::SmartHome,
        &[
            "alexa",
            "google home",
            "lâmpada inteligente",
            "tomada inteligente",
        ],
    ),
    (
        Category::Power,
        &["carregador", "bateria", "power bank", "fonte de alimentação"],
    ),
];

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Hardware,
        Category::Peripherals,
        Category::Computers,
        Category::Games,
        Category::Mobile,
        Category::TvAudio,
        Category::Speakers,
        Category::GamerFurniture,
        Category::SmartHome,
        Category::Power,
    ];

    #[must_use]
    pub fn id(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// URL slug used by the storefront navigation.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Category::Hardware => "hardware",
            Category::Peripherals => "perifericos",
            Category::Computers => "computadores",
            Category::Games => "games",
            Category::Mobile => "celulares",
            Category::TvAudio => "tv-audio",
            Category::Speakers => "caixas-de-som",
            Category::GamerFurniture => "moveis-gamer",
            Category::SmartHome => "casa-inteligente",
            Category::Power => "energia",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Hardware => "Hardware",
            Category::Peripherals => "Periféricos",
            Category::Computers => "Computadores",
            Category::Games => "Games",
            Category::Mobile => "Celulares",
            Category::TvAudio => "TV e Áudio",
            Category::Speakers => "Caixas de Som",
            Category::GamerFurniture => "Móveis Gamer",
            Category::SmartHome => "Casa Inteligente",
            Category::Power => "Energia",
        }
    }
}

impl From<Category> for u8 {
    fn from(category: Category) -> Self {
        category.id()
    }
}

impl TryFrom<u8> for Category {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Category::from_id(id).ok_or_else(|| format!("unknown category id {id}"))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
