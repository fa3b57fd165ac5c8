//! Built-in sample data set.
//!
//! A compact fixture world: five articles whose id order, date order, vote
//! order, and comment-count order all differ, plus one topic with no
//! articles and one article with no comments.

use chrono::{DateTime, TimeZone, Utc};

use super::db::Store;

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

const TOPICS: &[(&str, &str)] = &[
    ("coffee", "Bean to cup, and everything in between"),
    ("cycling", "Road, gravel, and the occasional velodrome"),
    ("synths", "Oscillators, filters, and patch cables"),
    ("film", "Analog photography and darkroom notes"),
];

const USERS: &[(&str, &str, &str)] = &[
    ("plange", "Paula Lange", "https://avatars.example.net/plange.png"),
    ("mkowalski", "Marek Kowalski", "https://avatars.example.net/mkowalski.png"),
    ("tbone", "Tessa Boone", "https://avatars.example.net/tbone.png"),
    ("salix", "Sal Ix", "https://avatars.example.net/salix.png"),
];

struct SeedArticle {
    article_id: i64,
    title: &'static str,
    topic: &'static str,
    author: &'static str,
    body: &'static str,
    created_at: DateTime<Utc>,
    votes: i64,
}

struct SeedComment {
    comment_id: i64,
    article_id: i64,
    author: &'static str,
    body: &'static str,
    votes: i64,
    created_at: DateTime<Utc>,
}

fn sample_articles() -> Vec<SeedArticle> {
    vec![
        SeedArticle {
            article_id: 1,
            title: "Espresso at altitude",
            topic: "coffee",
            author: "plange",
            body: "Water boils early up here, and the shots taste like it. \
                   Notes from a season of pulling espresso at 2,400 metres.",
            created_at: ts(2024, 3, 14, 8, 0),
            votes: 40,
        },
        SeedArticle {
            article_id: 2,
            title: "Burr grinders, ranked",
            topic: "coffee",
            author: "mkowalski",
            body: "Twelve grinders, one bag of the same roast, and a week of \
                   cupping. The rankings surprised us.",
            created_at: ts(2024, 5, 2, 12, 30),
            votes: 5,
        },
        SeedArticle {
            article_id: 3,
            title: "Climbing gears for heavier riders",
            topic: "cycling",
            author: "tbone",
            body: "Gear ratios the catalogues pretend you do not need. What \
                   actually works on a 14 percent grade.",
            created_at: ts(2024, 1, 20, 17, 45),
            votes: 120,
        },
        SeedArticle {
            article_id: 4,
            title: "Detuning oscillators on purpose",
            topic: "synths",
            author: "plange",
            body: "A little drift makes a patch feel alive. How far can you \
                   push it before the chorus turns to soup?",
            created_at: ts(2024, 7, 8, 9, 15),
            votes: -3,
        },
        SeedArticle {
            article_id: 5,
            title: "A city crossed by bike",
            topic: "cycling",
            author: "salix",
            body: "Forty-one bridges, one afternoon, zero punctures. A ride \
                   report.",
            created_at: ts(2023, 11, 30, 21, 0),
            votes: 12,
        },
    ]
}

fn sample_comments() -> Vec<SeedComment> {
    vec![
        SeedComment {
            comment_id: 1,
            article_id: 1,
            author: "mkowalski",
            body: "Tried this on a trip to Cusco. Can confirm the crema never stood a chance.",
            votes: 4,
            created_at: ts(2024, 3, 14, 10, 5),
        },
        SeedComment {
            comment_id: 2,
            article_id: 1,
            author: "tbone",
            body: "What roast level held up best?",
            votes: 0,
            created_at: ts(2024, 3, 15, 7, 40),
        },
        SeedComment {
            comment_id: 3,
            article_id: 1,
            author: "salix",
            body: "Pressure profiling fixed most of this for me.",
            votes: -2,
            created_at: ts(2024, 3, 16, 19, 25),
        },
        SeedComment {
            comment_id: 4,
            article_id: 2,
            author: "plange",
            body: "No love for hand grinders? The quiet ones deserve a list of their own.",
            votes: 7,
            created_at: ts(2024, 5, 3, 8, 10),
        },
        SeedComment {
            comment_id: 5,
            article_id: 3,
            author: "plange",
            body: "Swapped to a 34T ring after reading this. My knees say thank you.",
            votes: 15,
            created_at: ts(2024, 1, 21, 9, 0),
        },
        SeedComment {
            comment_id: 6,
            article_id: 3,
            author: "mkowalski",
            body: "The catalogue ratios are built for riders who weigh nothing and live nowhere steep.",
            votes: 9,
            created_at: ts(2024, 1, 22, 14, 30),
        },
        SeedComment {
            comment_id: 7,
            article_id: 3,
            author: "salix",
            body: "Running 11-42 on the commuter now.",
            votes: 1,
            created_at: ts(2024, 2, 1, 18, 5),
        },
        SeedComment {
            comment_id: 8,
            article_id: 3,
            author: "tbone",
            body: "Follow-up: the same logic applies to loaded touring.",
            votes: 3,
            created_at: ts(2024, 2, 10, 11, 55),
        },
        SeedComment {
            comment_id: 9,
            article_id: 4,
            author: "salix",
            body: "Two cents sharp is my limit before it stops sounding like a choice.",
            votes: 2,
            created_at: ts(2024, 7, 8, 16, 40),
        },
        SeedComment {
            comment_id: 10,
            article_id: 4,
            author: "mkowalski",
            body: "Now do the same for supersaws.",
            votes: 0,
            created_at: ts(2024, 7, 9, 10, 20),
        },
    ]
}

impl Store {
    /// Replace the current contents with the bundled sample data
    pub async fn seed_sample(&self) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        // clear child tables first
        sqlx::query("DELETE FROM comments").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM articles").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM users").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM topics").execute(&mut *tx).await?;

        for &(slug, description) in TOPICS {
            sqlx::query("INSERT INTO topics (slug, description) VALUES (?, ?)")
                .bind(slug)
                .bind(description)
                .execute(&mut *tx)
                .await?;
        }

        for &(username, name, avatar_url) in USERS {
            sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES (?, ?, ?)")
                .bind(username)
                .bind(name)
                .bind(avatar_url)
                .execute(&mut *tx)
                .await?;
        }

        for article in sample_articles() {
            sqlx::query(
                "INSERT INTO articles (article_id, title, topic, author, body, created_at, votes)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(article.article_id)
            .bind(article.title)
            .bind(article.topic)
            .bind(article.author)
            .bind(article.body)
            .bind(article.created_at)
            .bind(article.votes)
            .execute(&mut *tx)
            .await?;
        }

        for comment in sample_comments() {
            sqlx::query(
                "INSERT INTO comments (comment_id, article_id, author, body, votes, created_at)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(comment.comment_id)
            .bind(comment.article_id)
            .bind(comment.author)
            .bind(comment.body)
            .bind(comment.votes)
            .bind(comment.created_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        tracing::info!("sample data loaded");
        Ok(())
    }
}
