//! The article catalog: a fixed set of stories and trending-topic seeds.
//!
//! The catalog is constructed once at startup and never mutated. Everything
//! downstream (feed filtering, the article view, the trending updater) works
//! from this single source.

use crate::trending::TrendingTopic;

/// A single story in the catalog.
///
/// `date` is a display string, not a parsed timestamp — the catalog is
/// presentation data, not a feed archive.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    /// Unique, stable identity. Comments are keyed by this.
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// Body paragraphs, in order.
    pub content: Vec<String>,
    pub author: String,
    pub date: String,
    pub category: String,
    /// Opaque image reference (a `data:` URI for the built-in catalog).
    pub image: String,
    /// Candidate for the hero slot. Any number of articles may carry this.
    pub featured: bool,
}

/// Sentinel category meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// The session's static article set plus the trending seed.
pub struct Catalog {
    articles: Vec<Article>,
    trending_seed: Vec<TrendingTopic>,
}

impl Catalog {
    pub fn new(articles: Vec<Article>, trending_seed: Vec<TrendingTopic>) -> Self {
        Self {
            articles,
            trending_seed,
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Look up an article by identity. A missing id is a "not found" result
    /// for the caller to render, never an error.
    pub fn find(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// The hero article: first one flagged `featured`, or the first article
    /// when nothing is flagged. Panics only on an empty catalog, which the
    /// built-in catalog rules out.
    pub fn hero(&self) -> &Article {
        self.articles
            .iter()
            .find(|a| a.featured)
            .unwrap_or(&self.articles[0])
    }

    /// Unique categories in sorted order, with the "All" sentinel first.
    /// Drives the filter bar.
    pub fn categories(&self) -> Vec<String> {
        let mut cats: Vec<String> = self
            .articles
            .iter()
            .map(|a| a.category.clone())
            .collect();
        cats.sort();
        cats.dedup();
        cats.insert(0, ALL_CATEGORIES.to_string());
        cats
    }

    /// Starting trending-topic list. The updater task takes ownership of a
    /// clone and drifts it from there.
    pub fn trending_seed(&self) -> Vec<TrendingTopic> {
        self.trending_seed.clone()
    }

    /// The built-in demo catalog: six stories across six categories and six
    /// trending topics.
    pub fn builtin() -> Self {
        let articles = vec![
            Article {
                id: "1".into(),
                title: "The Future of AI: Beyond the Hype".into(),
                excerpt: "As artificial intelligence permeates every industry, experts weigh in \
                          on the ethical implications and the road ahead for AGI development."
                    .into(),
                content: vec![
                    "Artificial Intelligence has ceased to be a buzzword and has become a \
                     fundamental layer of modern technology. From generative models to \
                     autonomous agents, the pace of innovation is staggering."
                        .into(),
                    "\"We are at a tipping point,\" says Dr. Elena Rostova, a leading AI \
                     researcher. \"The questions we face today are no longer just about \
                     capability, but about alignment and safety.\""
                        .into(),
                    "This article explores the transformative potential of these technologies, \
                     looking beyond the initial hype cycle to identify long-term trends that \
                     will shape the next decade."
                        .into(),
                ],
                author: "Sarah Jenks".into(),
                date: "Oct 24, 2023".into(),
                category: "Technology".into(),
                image: placeholder_image("#2563eb", "AI Future"),
                featured: true,
            },
            Article {
                id: "2".into(),
                title: "Sustainable Cities: Green Architecture on the Rise".into(),
                excerpt: "Urban planners are turning to nature for solutions. Vertical forests \
                          and carbon-neutral skyscrapers are redefining skylines."
                    .into(),
                content: vec![
                    "Concrete jungles are turning green. In major metropolises like Singapore, \
                     Milan, and New York, architects are integrating plant life directly into \
                     building facades."
                        .into(),
                    "These \"vertical forests\" serve multiple purposes: they absorb CO2, lower \
                     urban temperatures, and provide psychological relief for residents."
                        .into(),
                    "But the challenges are significant. Maintenance costs and structural \
                     requirements mean that green architecture is still a premium feature, \
                     though costs are falling rapidly."
                        .into(),
                ],
                author: "Michael Chen".into(),
                date: "Oct 23, 2023".into(),
                category: "Environment".into(),
                image: placeholder_image("#16a34a", "Green Cities"),
                featured: true,
            },
            Article {
                id: "3".into(),
                title: "Mars Mission: The new race to the Red Planet".into(),
                excerpt: "Space agencies and private companies accelerate their timelines for \
                          the first human landing on Mars."
                    .into(),
                content: vec![
                    "The race to Mars has heated up again. With Starship orbital tests and \
                     NASA's Artemis program gaining momentum, humanity looks closer than ever \
                     to becoming an interplanetary species."
                        .into(),
                    "However, the technical hurdles remain immense. Radiation shielding, life \
                     support, and the psychological toll of a 6-month journey are problems \
                     that still need robust solutions."
                        .into(),
                ],
                author: "Alex Rivera".into(),
                date: "Oct 22, 2023".into(),
                category: "Science".into(),
                image: placeholder_image("#dc2626", "Mars Mission"),
                featured: false,
            },
            Article {
                id: "4".into(),
                title: "Culinary Revolution: Ancient Grains Make a Comeback".into(),
                excerpt: "Chefs around the world are rediscovering ingredients that have been \
                          staples for millennia."
                    .into(),
                content: vec![
                    "Quinoa was just the beginning. Now, teff, fonio, and amaranth are finding \
                     their way onto Michelin-starred menus."
                        .into(),
                    "This shift isn't just about taste. It's about biodiversity and soil \
                     health. Monocultures of wheat and corn have depleted topsoil, and these \
                     resilient ancient grains offer a sustainable alternative."
                        .into(),
                ],
                author: "Julia Childers".into(),
                date: "Oct 21, 2023".into(),
                category: "Lifestyle".into(),
                image: placeholder_image("#d97706", "Ancient Grains"),
                featured: false,
            },
            Article {
                id: "5".into(),
                title: "Digital Minimalism: Finding Peace in a Connected World".into(),
                excerpt: "Why more people are switching to 'dumb phones' and limiting their \
                          screen time."
                    .into(),
                content: vec![
                    "The notification fatigue is real. A growing movement of 'digital \
                     minimalists' is rejecting the constant connectivity of the smartphone era."
                        .into(),
                    "Sales of feature phones are up 20% this year in some markets. People are \
                     craving disconnection to reconnect with reality."
                        .into(),
                ],
                author: "Tom Hiddleston".into(),
                date: "Oct 20, 2023".into(),
                category: "Health".into(),
                image: placeholder_image("#4b5563", "Digital Minimalism"),
                featured: false,
            },
            Article {
                id: "6".into(),
                title: "The Economics of Streaming: Is the Bubble Bursting?".into(),
                excerpt: "With rising prices and content fragmentation, consumers are \
                          rethinking their subscriptions."
                    .into(),
                content: vec![
                    "The golden age of cheap streaming is over. As platforms consolidate and \
                     prices hike, piracy is seeing a resurgence."
                        .into(),
                    "Analysts predict a 'Great Re-bundling' where services will aggregate \
                     again, looking suspiciously like the cable TV packages they arrived to \
                     replace."
                        .into(),
                ],
                author: "Emily Blunt".into(),
                date: "Oct 19, 2023".into(),
                category: "Business".into(),
                image: placeholder_image("#7c3aed", "Streaming Wars"),
                featured: false,
            },
        ];

        let trending_seed = vec![
            TrendingTopic::new(1, "Global Market Rally", "1.2M"),
            TrendingTopic::new(2, "New EV Regulations", "900K"),
            TrendingTopic::new(3, "Championship Finals", "850K"),
            TrendingTopic::new(4, "Tech Giant Merger", "720K"),
            TrendingTopic::new(5, "Heatwave Warning", "500K"),
            TrendingTopic::new(6, "Oscar Nominations", "300K"),
        ];

        Self::new(articles, trending_seed)
    }
}

/// Build an opaque placeholder image reference: a colored SVG inlined as a
/// `data:` URI. The TUI never decodes it; it exists so articles carry a
/// complete record.
fn placeholder_image(color: &str, text: &str) -> String {
    format!(
        "data:image/svg+xml;utf8,<svg width=\"600\" height=\"400\" \
         xmlns=\"http://www.w3.org/2000/svg\"><rect width=\"100%\" height=\"100%\" \
         fill=\"{color}\"/><text x=\"50%\" y=\"50%\" font-size=\"24\" fill=\"white\" \
         text-anchor=\"middle\">{text}</text></svg>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_has_six_articles_with_unique_ids() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.articles().len(), 6);

        let mut ids: Vec<&str> = catalog.articles().iter().map(|a| a.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn hero_is_first_featured_article() {
        let catalog = Catalog::builtin();
        let hero = catalog.hero();
        assert!(hero.featured);
        assert_eq!(hero.id, "1");
    }

    #[test]
    fn hero_falls_back_to_first_article_when_none_featured() {
        let mut catalog = Catalog::builtin();
        for article in &mut catalog.articles {
            article.featured = false;
        }
        assert_eq!(catalog.hero().id, "1");
    }

    #[test]
    fn find_known_and_unknown_ids() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find("3").map(|a| a.category.as_str()), Some("Science"));
        assert!(catalog.find("99").is_none());
        assert!(catalog.find("").is_none());
    }

    #[test]
    fn categories_are_sorted_unique_with_all_first() {
        let catalog = Catalog::builtin();
        let cats = catalog.categories();
        assert_eq!(cats[0], ALL_CATEGORIES);
        assert_eq!(
            cats[1..].to_vec(),
            vec![
                "Business",
                "Environment",
                "Health",
                "Lifestyle",
                "Science",
                "Technology"
            ]
        );
    }

    #[test]
    fn trending_seed_has_six_topics() {
        let catalog = Catalog::builtin();
        let seed = catalog.trending_seed();
        assert_eq!(seed.len(), 6);
        assert_eq!(seed[0].views, "1.2M");
    }
}
