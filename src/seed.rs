use time::macros::{date, datetime};
use time::OffsetDateTime;
use uuid::{uuid, Uuid};

use crate::auth::repo_types::User;
use crate::rooms::repo_types::{
    Category, Message, MissionTemplate, Role, Room, RoomMember, RoomOutput, VibeTag,
};

/// Interests offered as pick-lists during onboarding.
pub const ALL_INTERESTS: &[&str] = &[
    "Film",
    "Photography",
    "Design",
    "Coding",
    "Writing",
    "Music",
    "Theater",
    "Game Dev",
    "Animation",
    "Journalism",
    "Fashion",
    "Podcasting",
];

/// Majors offered as quick picks during onboarding; free text is allowed too.
pub const ALL_MAJORS: &[&str] = &[
    "Film & Media Production",
    "Computer Science",
    "Graphic Design",
    "English",
    "Music",
    "Business",
    "Architecture",
    "Psychology",
];

pub const ALL_YEARS: &[&str] = &["Freshman", "Sophomore", "Junior", "Senior", "Grad"];

/// Initial collections the store boots from. Identifiers are fixed so the
/// demo dataset is stable across runs.
#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub users: Vec<User>,
    pub rooms: Vec<Room>,
    pub members: Vec<RoomMember>,
    pub messages: Vec<Message>,
    pub outputs: Vec<RoomOutput>,
    pub templates: Vec<MissionTemplate>,
}

impl Seed {
    /// Zero-state seed: no users, no rooms, only the mission templates.
    pub fn empty() -> Self {
        Self {
            templates: templates(),
            ..Self::default()
        }
    }

    /// The bundled campus demo dataset.
    pub fn demo() -> Self {
        let maya = user(
            uuid!("7c3f9b42-91d4-4a8e-b5c1-2e6f0a8d3b17"),
            "Maya Chen",
            "maya@campus.edu",
            "Film & Media Production",
            "Junior",
            &["Film", "Photography"],
            &[Role::Camera, Role::Editor],
            Some("https://mayachen.example/reel"),
        );
        let jordan = user(
            uuid!("d58a1c7e-3f26-49b0-8a94-c1e7f52d6a03"),
            "Jordan Okafor",
            "jordan@campus.edu",
            "Computer Science",
            "Sophomore",
            &["Coding", "Game Dev"],
            &[Role::Developer],
            None,
        );
        let priya = user(
            uuid!("2e94d6f1-8b07-4c53-9d28-5a3c1e09b764"),
            "Priya Natarajan",
            "priya@campus.edu",
            "Graphic Design",
            "Senior",
            &["Design", "Journalism"],
            &[Role::Designer, Role::Director],
            Some("https://priyamakes.example"),
        );

        // most-recently-created first, matching how create_room prepends
        let doc_shoot = Room {
            id: uuid!("a1b8e034-5c72-4f19-b6d8-90e4a2c7f531"),
            title: "Campus Doc: A Day at the Dining Hall".into(),
            description: "Short observational documentary about the people who keep \
                          the dining hall running. Two shooting days plus an edit week."
                .into(),
            category: Category::FilmVideo,
            vibe_tags: vec![VibeTag::Serious, VibeTag::PortfolioFocused],
            roles_needed: vec![Role::Camera, Role::Editor, Role::Director],
            date: date!(2026 - 08 - 21),
            time: "09:00".into(),
            location: "North Dining Hall".into(),
            max_participants: 5,
            created_by: maya.id,
            created_at: datetime!(2026-08-02 17:45 UTC),
            is_pop_up: false,
        };
        let hackathon = Room {
            id: uuid!("f4c20d9b-7e85-4316-a2f7-0b8d5c91e642"),
            title: "24h Hackathon Team: Campus Maps".into(),
            description: "Building an accessible indoor-navigation prototype for the \
                          fall hackathon. Beginners welcome on the design side."
                .into(),
            category: Category::Hackathon,
            vibe_tags: vec![VibeTag::Serious, VibeTag::BeginnerFriendly],
            roles_needed: vec![Role::Developer, Role::Developer, Role::Designer],
            date: date!(2026 - 08 - 15),
            time: "10:00".into(),
            location: "Engineering Commons, Room 204".into(),
            max_participants: 4,
            created_by: jordan.id,
            created_at: datetime!(2026-08-01 21:10 UTC),
            is_pop_up: false,
        };
        let photo_walk = Room {
            id: uuid!("69d7f3a8-0c14-4b6e-95d2-8e1a7b40c9f5"),
            title: "Golden Hour Photo Walk".into(),
            description: "Casual loop around the lake at sunset. Bring any camera, \
                          phone included.".into(),
            category: Category::Photography,
            vibe_tags: vec![VibeTag::Chill, VibeTag::BeginnerFriendly],
            roles_needed: vec![Role::Camera, Role::Camera],
            date: date!(2026 - 08 - 08),
            time: "19:30".into(),
            location: "Lakeside path, boathouse entrance".into(),
            max_participants: 8,
            created_by: maya.id,
            created_at: datetime!(2026-07-28 12:05 UTC),
            is_pop_up: false,
        };
        let zine_jam = Room {
            id: uuid!("c85b2f60-94ad-4e37-b1c9-6d0e3a58f217"),
            title: "Zine Jam Pop-Up".into(),
            description: "One evening, one zine. Layout, write, print, staple.".into(),
            category: Category::Design,
            vibe_tags: vec![VibeTag::Chill],
            roles_needed: vec![Role::Designer, Role::Writer],
            date: date!(2026 - 08 - 06),
            time: "18:00".into(),
            location: "Print lab, basement of Hartley".into(),
            max_participants: 6,
            created_by: priya.id,
            created_at: datetime!(2026-07-25 15:30 UTC),
            is_pop_up: true,
        };

        let members = vec![
            // creators hold a membership with no chosen role, the way
            // create_room auto-joins them
            member(
                uuid!("31f6c8d2-5a90-4e7b-8c43-d17e92b05f68"),
                &doc_shoot,
                &maya,
                None,
                datetime!(2026-08-02 17:45 UTC),
            ),
            member(
                uuid!("8a4d07e9-2b63-4f58-91a0-c5e8d3f71b24"),
                &hackathon,
                &jordan,
                None,
                datetime!(2026-08-01 21:10 UTC),
            ),
            member(
                uuid!("e0c93b57-6f12-48ad-b7e4-29a8c1d60f35"),
                &photo_walk,
                &maya,
                None,
                datetime!(2026-07-28 12:05 UTC),
            ),
            member(
                uuid!("5d21a9f4-8c06-47b3-a58d-1f7e40b92c86"),
                &zine_jam,
                &priya,
                None,
                datetime!(2026-07-25 15:30 UTC),
            ),
            member(
                uuid!("b7e45c08-1d39-4a62-bf95-73c0e8a21d54"),
                &hackathon,
                &priya,
                Some(Role::Designer),
                datetime!(2026-08-02 09:22 UTC),
            ),
            member(
                uuid!("46a0d8b3-9e57-41cf-82a6-05d1f3c7e928"),
                &photo_walk,
                &jordan,
                Some(Role::Camera),
                datetime!(2026-07-30 19:40 UTC),
            ),
        ];

        let messages = vec![
            message(
                uuid!("92c5e7a0-3d48-4b16-9f72-e8a4d05c31b9"),
                &hackathon,
                &jordan,
                "Repo is up, link in the description. Kickoff call Friday night.",
                datetime!(2026-08-02 09:30 UTC),
            ),
            message(
                uuid!("0fd83b26-7a91-45ce-b04d-6e25c9f187a3"),
                &hackathon,
                &priya,
                "I'll sketch the first map screens before then.",
                datetime!(2026-08-02 09:34 UTC),
            ),
            message(
                uuid!("6b19f0c4-e572-483a-95b8-2d7a04e6c1f5"),
                &photo_walk,
                &maya,
                "Forecast says clear skies — we're on!",
                datetime!(2026-08-03 08:12 UTC),
            ),
        ];

        let outputs = vec![
            output(
                uuid!("d43a8e61-0b97-42f5-8cd2-7e50a1b3f964"),
                &photo_walk,
                &maya,
                "Last walk's contact sheet",
                "https://photos.example/golden-hour-june",
                Some("https://photos.example/golden-hour-june/cover.jpg"),
                datetime!(2026-07-29 10:00 UTC),
            ),
            output(
                uuid!("17e5b2c9-84d0-46a3-b9f1-3c68e0d72a45"),
                &zine_jam,
                &priya,
                "Cover mockup, issue #3",
                "https://priyamakes.example/zine-3-cover",
                None,
                datetime!(2026-07-31 22:18 UTC),
            ),
        ];

        Self {
            users: vec![maya, jordan, priya],
            rooms: vec![doc_shoot, hackathon, photo_walk, zine_jam],
            members,
            messages,
            outputs,
            templates: templates(),
        }
    }
}

fn templates() -> Vec<MissionTemplate> {
    vec![
        MissionTemplate {
            id: uuid!("3a7c1e95-d240-48b6-9f58-07e3b2a6c4d1"),
            title: "Mini Documentary".into(),
            category: Category::FilmVideo,
            description: "Pick one person or place on campus and tell its story in \
                          three minutes.".into(),
            suggested_roles: vec![Role::Camera, Role::Editor, Role::Director],
            suggested_vibes: vec![VibeTag::Serious, VibeTag::PortfolioFocused],
        },
        MissionTemplate {
            id: uuid!("b05f8d32-61ae-4c97-82d4-9e1c70f5a386"),
            title: "Photo Essay Walk".into(),
            category: Category::Photography,
            description: "A themed walk that ends with a shared twelve-image essay.".into(),
            suggested_roles: vec![Role::Camera],
            suggested_vibes: vec![VibeTag::Chill, VibeTag::BeginnerFriendly],
        },
        MissionTemplate {
            id: uuid!("e62d0a84-97c5-4f13-b8a0-4d27e9b1c653"),
            title: "Weekend Hackathon Squad".into(),
            category: Category::Hackathon,
            description: "Form a balanced team before the doors open: builders plus \
                          someone who owns the pitch.".into(),
            suggested_roles: vec![Role::Developer, Role::Developer, Role::Designer],
            suggested_vibes: vec![VibeTag::Serious],
        },
        MissionTemplate {
            id: uuid!("48c9f6b0-2d71-4e85-a39c-b60d58e217f4"),
            title: "Zine in a Day".into(),
            category: Category::Design,
            description: "Write, lay out and print a zine in one sitting.".into(),
            suggested_roles: vec![Role::Designer, Role::Writer, Role::Editor],
            suggested_vibes: vec![VibeTag::Chill],
        },
    ]
}

fn user(
    id: Uuid,
    name: &str,
    email: &str,
    major: &str,
    year: &str,
    interests: &[&str],
    skills: &[Role],
    portfolio_url: Option<&str>,
) -> User {
    User {
        id,
        name: name.into(),
        email: email.into(),
        major: major.into(),
        year: year.into(),
        interests: interests.iter().map(|s| s.to_string()).collect(),
        skills: skills.to_vec(),
        portfolio_url: portfolio_url.map(Into::into),
        avatar: User::placeholder_avatar(email),
    }
}

fn member(
    id: Uuid,
    room: &Room,
    user: &User,
    role_chosen: Option<Role>,
    joined_at: OffsetDateTime,
) -> RoomMember {
    RoomMember {
        id,
        room_id: room.id,
        user_id: user.id,
        user: user.clone(),
        role_chosen,
        joined_at,
    }
}

fn message(
    id: Uuid,
    room: &Room,
    user: &User,
    text: &str,
    created_at: OffsetDateTime,
) -> Message {
    Message {
        id,
        room_id: room.id,
        user_id: user.id,
        user: user.clone(),
        text: text.into(),
        created_at,
    }
}

fn output(
    id: Uuid,
    room: &Room,
    user: &User,
    title: &str,
    link: &str,
    image_url: Option<&str>,
    created_at: OffsetDateTime,
) -> RoomOutput {
    RoomOutput {
        id,
        room_id: room.id,
        user_id: user.id,
        user: user.clone(),
        title: title.into(),
        link: link.into(),
        image_url: image_url.map(Into::into),
        created_at,
    }
}
