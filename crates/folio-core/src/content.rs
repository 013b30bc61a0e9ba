//! Static site content: projects, skills and testimonials.
//!
//! Records are immutable and addressed by index; scene markers carry the
//! index of the project they stand for as their payload.

use crate::scene::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub live_url: &'static str,
    pub repo_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0..=100.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub title: &'static str,
    pub quote: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "DayFlow.ai – Smart Productivity Tracker",
        description: "A full-featured productivity platform that blends smart planning with mindful living. Helps users structure their day, stay focused, and reflect effectively.",
        image: "https://images.unsplash.com/photo-1518976024611-28bf4b48222e?q=80&w=685&auto=format&fit=crop",
        tags: &["Next.js", "LangChain", "OpenAI", "MongoDB", "Docker", "GitHub Actions"],
        live_url: "#",
        repo_url: "https://github.com/SoloSorceror/DayFlow.ai",
    },
    Project {
        title: "Spotify Recommender",
        description: "A personalized music recommendation system using content-based filtering to suggest songs tailored to user preferences. Built to explore recommendation engines and lightweight ML logic.",
        image: "https://images.unsplash.com/photo-1458560871784-56d23406c091?w=600&auto=format&fit=crop&q=60",
        tags: &["Python", "Pandas", "scikit-learn", "Streamlit"],
        live_url: "#",
        repo_url: "#",
    },
    Project {
        title: "Medical Diagnosis ML App",
        description: "Predicts potential diseases based on patient biological data using logistic regression. Focused on preprocessing, feature scaling, and accuracy.",
        image: "https://images.unsplash.com/photo-1526256262350-7da7584cf5eb?q=80&w=1170&auto=format&fit=crop",
        tags: &["Python", "scikit-learn", "Pandas", "Matplotlib"],
        live_url: "#",
        repo_url: "#",
    },
    Project {
        title: "Personal Portfolio Website",
        description: "Fully responsive, animated personal website to showcase my work and skills. Designed with simplicity, accessibility, and fluid user experience in mind.",
        image: "https://images.unsplash.com/photo-1516249181155-bbf89a130f77?q=80&w=2071&auto=format&fit=crop",
        tags: &["Next.js", "React", "Tailwind CSS", "Three.js", "Framer Motion"],
        live_url: "#",
        repo_url: "#",
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Programming & Core CS",
        skills: &[
            Skill { name: "C++, Java, Python, JavaScript (ES6+)", level: 90 },
            Skill { name: "Data Structures & Algorithms", level: 90 },
            Skill { name: "Problem Solving & Competitive Programming", level: 85 },
            Skill { name: "Clean Architecture Principles", level: 80 },
        ],
    },
    SkillCategory {
        title: "Full-Stack Development",
        skills: &[
            Skill { name: "React.js, Next.js, Node.js, Express.js", level: 85 },
            Skill { name: "MongoDB, Mongoose, REST APIs", level: 80 },
            Skill { name: "Server-Side Rendering & API Integration", level: 75 },
            Skill { name: "End-to-end App Development", level: 90 },
        ],
    },
    SkillCategory {
        title: "AI & Machine Learning",
        skills: &[
            Skill { name: "LangChain & OpenAI API Integration", level: 85 },
            Skill { name: "Prompt Engineering & AI Agents", level: 85 },
            Skill { name: "Scikit-learn, Pandas, NumPy", level: 90 },
            Skill { name: "Vector DBs (Chroma, Pinecone)", level: 70 },
        ],
    },
    SkillCategory {
        title: "DevOps & Cloud",
        skills: &[
            Skill { name: "Docker, Kubernetes, GCP", level: 75 },
            Skill { name: "Git, GitHub Actions, CI/CD", level: 85 },
            Skill { name: "NGINX Ingress & SSL Integration", level: 70 },
            Skill { name: "Vercel, Netlify, Postman", level: 90 },
        ],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Jane Doe",
        title: "Project Manager, Tech Solutions Inc.",
        quote: "Sanjay is a remarkable developer with an incredible work ethic. His ability to quickly grasp complex concepts and deliver high-quality code was a huge asset to our team. He's a pleasure to work with.",
    },
    Testimonial {
        name: "John Smith",
        title: "Lead Researcher, Innovate AI Labs",
        quote: "His enthusiasm for machine learning is contagious. Sanjay's contributions to our research project were invaluable, and his analytical skills are top-notch. I highly recommend him.",
    },
    Testimonial {
        name: "Emily White",
        title: "Professor, University of Technology",
        quote: "One of the brightest students I've had the pleasure of teaching. Sanjay consistently demonstrated a deep understanding of computer science principles and a passion for solving real-world problems.",
    },
    Testimonial {
        name: "Michael Brown",
        title: "Senior Software Engineer, Google",
        quote: "Sanjay is a quick learner and a team player. His problem-solving skills are impressive and he always brings a positive attitude to the team. I'm confident he'll be a great asset to any company.",
    },
];

#[inline]
pub fn project(index: usize) -> Option<&'static Project> {
    PROJECTS.get(index)
}

/// Initial project selection: the first record, or nothing when the list is empty.
pub fn initial_project_selection() -> Selection {
    if PROJECTS.is_empty() {
        Selection::default()
    } else {
        Selection::with(0)
    }
}
