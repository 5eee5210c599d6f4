use crate::{Creator, Video, VideoCategory};

use chrono::DateTime;

const THUMBNAIL_QUERY: &str = "auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

struct Seed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    photo: u32,
    duration: u32,
    views: u64,
    likes: u64,
    /// Unix seconds, UTC
    uploaded_at: i64,
    category: VideoCategory,
    tags: &'static [&'static str],
}

const SEEDS: [Seed; 8] = [
    Seed {
        id: "1",
        title: "Introduction to Web Development",
        description: "Learn the basics of HTML, CSS, and JavaScript to start building websites. This comprehensive tutorial covers everything you need to know to get started with web development.\n\nTopics covered:\n- HTML structure\n- CSS styling\n- Basic JavaScript",
        photo: 270348,
        duration: 560,
        views: 15420,
        likes: 1250,
        uploaded_at: 1715783520, // 2024-05-15T14:32:00Z
        category: VideoCategory::Education,
        tags: &["web development", "programming", "html", "css", "javascript"],
    },
    Seed {
        id: "2",
        title: "Advanced React Hooks Tutorial",
        description: "Deep dive into React Hooks. Learn about useState, useEffect, useContext, and custom hooks to improve your React applications.",
        photo: 577585,
        duration: 1240,
        views: 8750,
        likes: 945,
        uploaded_at: 1715332500, // 2024-05-10T09:15:00Z
        category: VideoCategory::Education,
        tags: &["react", "javascript", "programming", "frontend"],
    },
    Seed {
        id: "3",
        title: "Building a Netflix Clone",
        description: "Follow along as we build a Netflix clone using React, Firebase, and Tailwind CSS. Learn how to implement authentication, data fetching, and responsive design.",
        photo: 7587807,
        duration: 3600,
        views: 24600,
        likes: 2100,
        uploaded_at: 1714927500, // 2024-05-05T16:45:00Z
        category: VideoCategory::Technology,
        tags: &["react", "firebase", "tailwind", "clone", "project"],
    },
    Seed {
        id: "4",
        title: "Flutter vs React Native: 2023 Comparison",
        description: "A detailed comparison between Flutter and React Native for mobile app development in 2023. Which one should you choose for your next project?",
        photo: 196644,
        duration: 1020,
        views: 18300,
        likes: 1560,
        uploaded_at: 1714303200, // 2024-04-28T11:20:00Z
        category: VideoCategory::Technology,
        tags: &["flutter", "react native", "mobile development", "comparison"],
    },
    Seed {
        id: "5",
        title: "Machine Learning for Beginners",
        description: "An introduction to machine learning concepts and algorithms. Learn about supervised and unsupervised learning, neural networks, and how to apply ML to real-world problems.",
        photo: 8438923,
        duration: 2400,
        views: 32100,
        likes: 2800,
        uploaded_at: 1713601800, // 2024-04-20T08:30:00Z
        category: VideoCategory::Education,
        tags: &["machine learning", "AI", "programming", "data science"],
    },
    Seed {
        id: "6",
        title: "How to Build a Personal Brand as a Developer",
        description: "Tips and strategies for building your personal brand as a software developer. Learn how to create content, network effectively, and stand out in the job market.",
        photo: 3861958,
        duration: 840,
        views: 9500,
        likes: 1120,
        uploaded_at: 1713193800, // 2024-04-15T15:10:00Z
        category: VideoCategory::Career,
        tags: &["personal brand", "career", "software development"],
    },
    Seed {
        id: "7",
        title: "Building a Full-Stack App with Node.js and React",
        description: "Learn how to build a complete web application using Node.js for the backend and React for the frontend. We'll cover everything from setting up the project to deployment.",
        photo: 1181675,
        duration: 4800,
        views: 27800,
        likes: 2350,
        uploaded_at: 1712743500, // 2024-04-10T10:05:00Z
        category: VideoCategory::Technology,
        tags: &["node.js", "react", "full-stack", "web development"],
    },
    Seed {
        id: "8",
        title: "CSS Grid and Flexbox Masterclass",
        description: "Master modern CSS layout techniques with this comprehensive guide to CSS Grid and Flexbox. Learn how to create responsive layouts with ease.",
        photo: 270408,
        duration: 1800,
        views: 14200,
        likes: 1680,
        uploaded_at: 1712328000, // 2024-04-05T14:40:00Z
        category: VideoCategory::Education,
        tags: &["css", "web design", "responsive", "frontend"],
    },
];

fn creator() -> Creator {
    Creator {
        id: String::from("1"),
        name: String::from("Video Creator"),
        avatar: String::from("https://i.pravatar.cc/150?img=11"),
        subscribers: 1240,
    }
}

pub(crate) fn videos() -> Vec<Video> {
    let creator = creator();

    SEEDS
        .iter()
        .map(|seed| Video {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            thumbnail_url: format!(
                "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?{THUMBNAIL_QUERY}",
                photo = seed.photo
            ),
            video_url: format!("https://example.com/video{}.mp4", seed.id),
            duration: seed.duration,
            views: seed.views,
            likes: seed.likes,
            uploaded_at: DateTime::from_timestamp(seed.uploaded_at, 0).unwrap_or_default(),
            creator: creator.clone(),
            category: seed.category,
            tags: seed.tags.iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}
