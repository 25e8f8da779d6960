use serde::{Deserialize, Deserializer, Serialize};

/// Navigation data pushed by the host on every render event.
///
/// Every collection is optional on the wire; an absent or `null` collection
/// reads as empty through the accessor methods.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationTree {
    #[serde(default, alias = "mainSections")]
    pub main_sections: Option<Vec<MainSection>>,
    #[serde(default)]
    pub programs: Option<Vec<Program>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MainSection {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub icon: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: String,
    #[serde(default)]
    pub modules: Option<Vec<Module>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: String,
    #[serde(default)]
    pub lessons: Option<Vec<Lesson>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: String,
    #[serde(default)]
    pub groups: Option<Vec<Group>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: String,
    #[serde(default)]
    pub cards: Option<Vec<Card>>,
    #[serde(default, alias = "hasMoreCards", deserialize_with = "lenient_bool")]
    pub has_more_cards: bool,
    #[serde(default, alias = "moreCardsCount", deserialize_with = "lenient_count")]
    pub more_cards_count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: String,
    #[serde(default)]
    pub risk: Option<f64>, // null when the producer has no estimate
}

impl NavigationTree {
    pub fn main_sections(&self) -> &[MainSection] {
        self.main_sections.as_deref().unwrap_or_default()
    }

    pub fn programs(&self) -> &[Program] {
        self.programs.as_deref().unwrap_or_default()
    }

    /// Decode a tree from its JSON wire form.
    pub fn from_json(json: &str) -> crate::error::NavResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Program {
    pub fn modules(&self) -> &[Module] {
        self.modules.as_deref().unwrap_or_default()
    }
}

impl Module {
    pub fn lessons(&self) -> &[Lesson] {
        self.lessons.as_deref().unwrap_or_default()
    }
}

impl Lesson {
    pub fn groups(&self) -> &[Group] {
        self.groups.as_deref().unwrap_or_default()
    }
}

impl Group {
    pub fn cards(&self) -> &[Card] {
        self.cards.as_deref().unwrap_or_default()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

// Card ids are emitted as integers by the producer; everything is compared as text.
fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawScalar>::deserialize(deserializer)? {
        Some(RawScalar::Text(s)) => s,
        Some(RawScalar::Int(i)) => i.to_string(),
        Some(RawScalar::Float(f)) => f.to_string(),
        Some(RawScalar::Bool(b)) => b.to_string(),
        None => String::new(),
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawScalar>::deserialize(deserializer)? {
        Some(RawScalar::Bool(b)) => b,
        Some(RawScalar::Int(i)) => i != 0,
        Some(RawScalar::Float(f)) => f != 0.0,
        Some(RawScalar::Text(s)) => s.eq_ignore_ascii_case("true"),
        None => false,
    })
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawScalar>::deserialize(deserializer)? {
        Some(RawScalar::Int(i)) => i.max(0) as u64,
        Some(RawScalar::Float(f)) if f.is_finite() && f > 0.0 => f as u64,
        Some(RawScalar::Text(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}
