use super::{Category, Channel, Video, VideoId};

const MEDIA_BASE_URL: &str = "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample";
const THUMBNAIL_PLACEHOLDER: &str = "/placeholder.svg?height=200&width=350";
const AVATAR_PLACEHOLDER: &str = "/placeholder.svg?height=48&width=48";

/// Fixed, read-only ordered sequence of playable items
#[derive(Debug, Clone)]
pub struct Catalog {
    videos: Vec<Video>,
}

impl Catalog {
    pub fn new(videos: Vec<Video>) -> Self {
        Self { videos }
    }

    /// The eight-item catalog the demo ships with
    pub fn demo() -> Self {
        Self::new(SEEDS.iter().map(Seed::to_video).collect())
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn get(&self, id: &VideoId) -> Option<&Video> {
        self.videos.iter().find(|v| &v.id == id)
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::demo()
    }
}

struct Seed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    media_file: &'static str,
    duration: &'static str,
    views: &'static str,
    likes: u64,
    comments: u64,
    upload_date: &'static str,
    category: Category,
    /// (id, name, subscribers)
    channel: (&'static str, &'static str, &'static str),
}

impl Seed {
    fn to_video(&self) -> Video {
        let (channel_id, channel_name, subscribers) = self.channel;
        Video {
            id: VideoId::new(self.id),
            title: self.title.to_string(),
            description: self.description.to_string(),
            video_url: format!("{}/{}", MEDIA_BASE_URL, self.media_file),
            thumbnail: THUMBNAIL_PLACEHOLDER.to_string(),
            duration: self.duration.to_string(),
            views: self.views.to_string(),
            likes: self.likes,
            comments: self.comments,
            upload_date: self.upload_date.to_string(),
            category: self.category,
            channel: Channel {
                id: channel_id.to_string(),
                name: channel_name.to_string(),
                avatar: AVATAR_PLACEHOLDER.to_string(),
                subscribers: subscribers.to_string(),
            },
        }
    }
}

const SEEDS: [Seed; 8] = [
    Seed {
        id: "1",
        title: "The Future of AI: What's Next in Artificial Intelligence",
        description: "In this video, we explore the cutting-edge developments in AI and what we can expect in the coming years.",
        media_file: "BigBuckBunny.mp4",
        duration: "12:34",
        views: "1.2M",
        likes: 45_000,
        comments: 3_200,
        upload_date: "2 weeks ago",
        category: Category::Technology,
        channel: ("channel1", "TechInsights", "2.5M"),
    },
    Seed {
        id: "2",
        title: "Web Development in 2025: The Essential Tools and Frameworks",
        description: "Discover the most important tools and frameworks that every web developer should know in 2025.",
        media_file: "ElephantsDream.mp4",
        duration: "8:22",
        views: "850K",
        likes: 32_000,
        comments: 1_800,
        upload_date: "3 days ago",
        category: Category::Programming,
        channel: ("channel2", "CodeMaster", "1.8M"),
    },
    Seed {
        id: "3",
        title: "Machine Learning Basics: A Beginner's Guide",
        description: "This comprehensive guide covers all the fundamentals of machine learning for beginners.",
        media_file: "ForBiggerBlazes.mp4",
        duration: "15:45",
        views: "2.3M",
        likes: 78_000,
        comments: 5_400,
        upload_date: "1 month ago",
        category: Category::Education,
        channel: ("channel3", "LearnWithMe", "3.2M"),
    },
    Seed {
        id: "4",
        title: "Design Systems Explained: Creating Consistent User Experiences",
        description: "Learn how to create and implement design systems that ensure consistency across your products.",
        media_file: "ForBiggerEscapes.mp4",
        duration: "10:15",
        views: "420K",
        likes: 18_000,
        comments: 950,
        upload_date: "5 days ago",
        category: Category::Design,
        channel: ("channel4", "DesignPro", "980K"),
    },
    Seed {
        id: "5",
        title: "The Complete Guide to Next.js 15",
        description: "Learn everything about the latest features in Next.js 15, including the new App Router, Server Components, and more.",
        media_file: "ForBiggerFun.mp4",
        duration: "18:30",
        views: "1.5M",
        likes: 62_000,
        comments: 4_100,
        upload_date: "1 week ago",
        category: Category::Programming,
        channel: ("channel5", "WebDevSimplified", "2.1M"),
    },
    Seed {
        id: "6",
        title: "Cybersecurity Essentials for Everyone",
        description: "Protect yourself online with these essential cybersecurity tips that everyone should know.",
        media_file: "ForBiggerJoyrides.mp4",
        duration: "14:22",
        views: "980K",
        likes: 41_000,
        comments: 2_300,
        upload_date: "2 weeks ago",
        category: Category::Technology,
        channel: ("channel6", "SecurityFirst", "1.4M"),
    },
    Seed {
        id: "7",
        title: "Building a SaaS Product from Scratch",
        description: "Follow along as we build a complete SaaS product from idea to launch.",
        media_file: "ForBiggerMeltdowns.mp4",
        duration: "22:45",
        views: "750K",
        likes: 38_000,
        comments: 1_900,
        upload_date: "3 weeks ago",
        category: Category::Business,
        channel: ("channel7", "StartupGuru", "1.2M"),
    },
    Seed {
        id: "8",
        title: "The Psychology of User Experience Design",
        description: "Understand the psychological principles behind effective UX design.",
        media_file: "Sintel.mp4",
        duration: "16:18",
        views: "630K",
        likes: 29_000,
        comments: 1_600,
        upload_date: "1 month ago",
        category: Category::Design,
        channel: ("channel8", "UXMaster", "950K"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_catalog_has_eight_unique_items() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.len(), 8);

        let ids: HashSet<_> = catalog.videos().iter().map(|v| v.id.clone()).collect();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_demo_catalog_keeps_order() {
        let catalog = Catalog::demo();
        let ids: Vec<&str> = catalog.videos().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::demo();
        let video = catalog.get(&VideoId::new("3")).unwrap();
        assert_eq!(video.title, "Machine Learning Basics: A Beginner's Guide");
        assert_eq!(video.category, Category::Education);
        assert_eq!(video.channel.name, "LearnWithMe");
        assert!(video.video_url.ends_with("/ForBiggerBlazes.mp4"));

        assert!(catalog.get(&VideoId::new("99")).is_none());
    }
}
