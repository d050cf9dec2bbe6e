/// A built-in library entry.
pub struct SeedTrack {
    pub key: &'static str,
    pub name: &'static str,
    pub artist: &'static str,
    pub rating: u8,
    pub play_count: u32,
}

/// Tracks every fresh library starts with when seeding is enabled.
pub const SEED_TRACKS: &[SeedTrack] = &[
    SeedTrack {
        key: "01",
        name: "Another Brick in the Wall",
        artist: "Pink Floyd",
        rating: 4,
        play_count: 0,
    },
    SeedTrack {
        key: "02",
        name: "Stayin' Alive",
        artist: "Bee Gees",
        rating: 5,
        play_count: 0,
    },
    SeedTrack {
        key: "03",
        name: "Highway to Hell",
        artist: "AC/DC",
        rating: 2,
        play_count: 0,
    },
    SeedTrack {
        key: "04",
        name: "Shape of You",
        artist: "Ed Sheeran",
        rating: 1,
        play_count: 0,
    },
    SeedTrack {
        key: "05",
        name: "Someone Like You",
        artist: "Adele",
        rating: 3,
        play_count: 0,
    },
];
