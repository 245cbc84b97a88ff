use crate::listings::domain::{Landlord, Listing, ListingDetails, ListingId, Review};

struct SeedListing {
    id: u32,
    name: &'static str,
    location: &'static str,
    rent: u32,
    occupancy: &'static str,
    amenities: &'static [&'static str],
    is_available: bool,
    rating: f32,
    created_at: i64,
    featured: bool,
    details: SeedDetails,
}

struct SeedDetails {
    description: &'static str,
    review_count: u32,
    verified: bool,
    room_types: &'static [&'static str],
    landlord: SeedLandlord,
    reviews: &'static [SeedReview],
}

struct SeedLandlord {
    name: &'static str,
    properties: u32,
    member_since: &'static str,
}

struct SeedReview {
    user_name: &'static str,
    rating: u8,
    date: &'static str,
    comment: &'static str,
}

const SEED: &[SeedListing] = &[
    SeedListing {
        id: 1,
        name: "Urban Stay PG",
        location: "Koramangala, Bangalore",
        rent: 8_500,
        occupancy: "Single",
        amenities: &["WiFi", "AC", "Food", "Laundry", "TV", "Power Backup", "Parking"],
        is_available: true,
        rating: 4.8,
        created_at: 1_717_200_000_000,
        featured: true,
        details: SeedDetails {
            description: "Urban Stay PG offers modern and comfortable living spaces designed for working professionals and students. Located in the heart of Koramangala, one of Bangalore's most vibrant neighborhoods, this PG accommodation offers easy access to tech parks, shopping centers, and entertainment venues.",
            review_count: 28,
            verified: true,
            room_types: &["Single", "Double"],
            landlord: SeedLandlord {
                name: "Amit Singh",
                properties: 5,
                member_since: "January 2020",
            },
            reviews: &[
                SeedReview {
                    user_name: "Rajesh Kumar",
                    rating: 5,
                    date: "May 2023",
                    comment: "Excellent PG with great amenities. The rooms are clean and well-maintained. The food is delicious and the staff is very friendly and helpful.",
                },
                SeedReview {
                    user_name: "Priya Sharma",
                    rating: 4,
                    date: "April 2023",
                    comment: "Good location and comfortable rooms. WiFi is reliable. Food could be better though.",
                },
                SeedReview {
                    user_name: "Nikhil Mehta",
                    rating: 5,
                    date: "March 2023",
                    comment: "I've been staying here for 6 months and it's been great. The location is perfect, close to my workplace and all necessary amenities. The rooms are spacious and well-maintained.",
                },
            ],
        },
    },
    SeedListing {
        id: 2,
        name: "Comfort Zone PG",
        location: "HSR Layout, Bangalore",
        rent: 9_200,
        occupancy: "Double",
        amenities: &["Food", "Laundry", "WiFi", "AC", "Power Backup", "Cleaning", "TV"],
        is_available: true,
        rating: 4.6,
        created_at: 1_718_064_000_000,
        featured: true,
        details: SeedDetails {
            description: "Comfort Zone PG is a premium paying guest accommodation designed to provide a comfortable and convenient living experience. Located in the upscale HSR Layout neighborhood, we offer easy access to major IT parks, shopping centers, and entertainment venues.",
            review_count: 19,
            verified: true,
            room_types: &["Double", "Triple"],
            landlord: SeedLandlord {
                name: "Sunita Reddy",
                properties: 3,
                member_since: "March 2021",
            },
            reviews: &[
                SeedReview {
                    user_name: "Karthik Nair",
                    rating: 5,
                    date: "June 2023",
                    comment: "One of the best PGs I've stayed in. The food is excellent and rooms are well-maintained. The staff is very cooperative and friendly.",
                },
                SeedReview {
                    user_name: "Divya Patel",
                    rating: 4,
                    date: "May 2023",
                    comment: "Great location and good amenities. The food variety could be improved, but overall a good place to stay.",
                },
            ],
        },
    },
    SeedListing {
        id: 3,
        name: "Green View PG",
        location: "Whitefield, Bangalore",
        rent: 7_800,
        occupancy: "Single",
        amenities: &["WiFi", "Food", "Gym", "Laundry", "Garden", "Parking"],
        is_available: false,
        rating: 4.5,
        created_at: 1_716_336_000_000,
        featured: true,
        details: SeedDetails {
            description: "Green View PG is a serene and eco-friendly accommodation located in the peaceful neighborhood of Whitefield. Surrounded by greenery, our PG offers a refreshing escape from the hustle and bustle of city life while still providing convenient access to major IT parks and shopping centers.",
            review_count: 22,
            verified: true,
            room_types: &["Single"],
            landlord: SeedLandlord {
                name: "Ramesh Iyer",
                properties: 2,
                member_since: "September 2020",
            },
            reviews: &[
                SeedReview {
                    user_name: "Sneha Gupta",
                    rating: 5,
                    date: "July 2023",
                    comment: "I love the peaceful environment of this PG. The garden is beautiful and the rooms are very neat and clean. Food is healthy and tasty.",
                },
                SeedReview {
                    user_name: "Aditya Sharma",
                    rating: 4,
                    date: "June 2023",
                    comment: "Good place for working professionals. Clean rooms and peaceful environment. The gym is a great addition.",
                },
                SeedReview {
                    user_name: "Meera Joshi",
                    rating: 4,
                    date: "May 2023",
                    comment: "The location is a bit far from the city center, but the peaceful environment makes up for it. Rooms are clean and the staff is helpful.",
                },
            ],
        },
    },
    SeedListing {
        id: 4,
        name: "Royal Residency PG",
        location: "Indiranagar, Bangalore",
        rent: 12_000,
        occupancy: "Single",
        amenities: &[
            "AC",
            "WiFi",
            "Food",
            "Gym",
            "Laundry",
            "TV",
            "Power Backup",
            "Attached Bathroom",
            "Cleaning",
        ],
        is_available: true,
        rating: 4.9,
        created_at: 1_719_792_000_000,
        featured: false,
        details: SeedDetails {
            description: "Royal Residency PG offers luxurious and comfortable accommodation in the heart of Indiranagar. Our premium PG is designed to provide a high-quality living experience for working professionals and students.",
            review_count: 34,
            verified: true,
            room_types: &["Single", "Double"],
            landlord: SeedLandlord {
                name: "Ajay Desai",
                properties: 6,
                member_since: "February 2019",
            },
            reviews: &[
                SeedReview {
                    user_name: "Vikram Kapoor",
                    rating: 5,
                    date: "August 2023",
                    comment: "Truly a luxurious experience. The rooms are spacious and well-maintained. The food is excellent and the staff is very professional.",
                },
                SeedReview {
                    user_name: "Ananya Sen",
                    rating: 5,
                    date: "July 2023",
                    comment: "The best PG I've stayed in. Everything is top-notch - from the rooms to the food to the amenities. Highly recommended.",
                },
                SeedReview {
                    user_name: "Rohan Malhotra",
                    rating: 4,
                    date: "June 2023",
                    comment: "Excellent location and premium facilities. The rooms are comfortable and the food is delicious. A bit on the expensive side but worth it.",
                },
            ],
        },
    },
    SeedListing {
        id: 5,
        name: "Maple Homes PG",
        location: "Electronic City, Bangalore",
        rent: 6_500,
        occupancy: "Triple",
        amenities: &["WiFi", "Food", "Laundry", "Power Backup", "Cleaning"],
        is_available: true,
        rating: 4.2,
        created_at: 1_715_472_000_000,
        featured: false,
        details: SeedDetails {
            description: "Maple Homes PG offers comfortable and affordable accommodation for students and working professionals in Electronic City. Located close to major IT companies and educational institutions, our PG provides a convenient living solution.",
            review_count: 15,
            verified: true,
            room_types: &["Single", "Double", "Triple"],
            landlord: SeedLandlord {
                name: "Lakshmi Narayan",
                properties: 2,
                member_since: "June 2021",
            },
            reviews: &[
                SeedReview {
                    user_name: "Suresh Kumar",
                    rating: 4,
                    date: "May 2023",
                    comment: "Good PG for the price. Rooms are clean and the location is convenient for those working in Electronic City.",
                },
                SeedReview {
                    user_name: "Jyoti Sharma",
                    rating: 4,
                    date: "April 2023",
                    comment: "Affordable and comfortable. The food is good and the staff is helpful. WiFi could be better though.",
                },
            ],
        },
    },
    SeedListing {
        id: 6,
        name: "Horizon PG",
        location: "Marathahalli, Bangalore",
        rent: 9_000,
        occupancy: "Double",
        amenities: &["AC", "WiFi", "Food", "Gym", "Laundry", "TV", "Cleaning"],
        is_available: true,
        rating: 4.5,
        created_at: 1_720_656_000_000,
        featured: false,
        details: SeedDetails {
            description: "Horizon PG offers premium accommodation for professionals and students in Marathahalli. Our strategically located PG provides easy access to major IT parks, shopping centers, and public transportation.",
            review_count: 23,
            verified: true,
            room_types: &["Single", "Double"],
            landlord: SeedLandlord {
                name: "Deepak Verma",
                properties: 4,
                member_since: "April 2020",
            },
            reviews: &[
                SeedReview {
                    user_name: "Rahul Mishra",
                    rating: 5,
                    date: "July 2023",
                    comment: "Great PG with excellent amenities. The rooms are clean and well-maintained. The food is delicious and the staff is very helpful.",
                },
                SeedReview {
                    user_name: "Pooja Gupta",
                    rating: 4,
                    date: "June 2023",
                    comment: "Good location and comfortable rooms. The gym is well-equipped and the food is good. WiFi is reliable.",
                },
                SeedReview {
                    user_name: "Sameer Patel",
                    rating: 4,
                    date: "May 2023",
                    comment: "Comfortable stay with good facilities. The location is convenient and the staff is cooperative.",
                },
            ],
        },
    },
    SeedListing {
        id: 7,
        name: "Koramangala Nest",
        location: "Koramangala, Bangalore",
        rent: 7_200,
        occupancy: "Double",
        amenities: &["WiFi", "Food", "Laundry"],
        is_available: false,
        rating: 4.1,
        created_at: 1_721_520_000_000,
        featured: false,
        details: SeedDetails {
            description: "Koramangala Nest is a compact, budget-friendly PG a short walk from the Koramangala food streets and the Forum mall. Rooms are shared between two residents and come with beds, wardrobes and study desks, with home-style meals served twice a day.",
            review_count: 9,
            verified: false,
            room_types: &["Double"],
            landlord: SeedLandlord {
                name: "Farah Khan",
                properties: 1,
                member_since: "November 2022",
            },
            reviews: &[
                SeedReview {
                    user_name: "Arjun Rao",
                    rating: 4,
                    date: "June 2023",
                    comment: "Affordable and close to everything. Rooms are a little small but the food is good.",
                },
            ],
        },
    },
    SeedListing {
        id: 8,
        name: "Lakeside Living PG",
        location: "Bellandur, Bangalore",
        rent: 10_500,
        occupancy: "Single",
        amenities: &["WiFi", "AC", "Gym", "Parking", "Attached Bathroom"],
        is_available: true,
        rating: 4.7,
        created_at: 1_722_384_000_000,
        featured: true,
        details: SeedDetails {
            description: "Lakeside Living PG overlooks Bellandur lake and sits minutes from the Outer Ring Road tech parks. Every room is a private single with an attached bathroom and air conditioning, and residents share a fully equipped gym and covered parking.",
            review_count: 12,
            verified: true,
            room_types: &["Single"],
            landlord: SeedLandlord {
                name: "Kavya Menon",
                properties: 3,
                member_since: "August 2021",
            },
            reviews: &[
                SeedReview {
                    user_name: "Siddharth Jain",
                    rating: 5,
                    date: "August 2023",
                    comment: "Quiet, clean and very well managed. The gym and lake view make it worth the price.",
                },
                SeedReview {
                    user_name: "Neha Reddy",
                    rating: 4,
                    date: "July 2023",
                    comment: "Great rooms and fast WiFi. Commute to the tech parks is easy.",
                },
            ],
        },
    },
];

pub(super) fn listings() -> Vec<Listing> {
    SEED.iter()
        .map(|seed| Listing {
            id: ListingId(seed.id),
            name: seed.name.to_string(),
            location: seed.location.to_string(),
            rent: seed.rent,
            occupancy: seed.occupancy.to_string(),
            amenities: seed.amenities.iter().map(|a| a.to_string()).collect(),
            is_available: seed.is_available,
            rating: seed.rating,
            created_at: seed.created_at,
            featured: seed.featured,
            details: details(&seed.details),
        })
        .collect()
}

fn details(seed: &SeedDetails) -> ListingDetails {
    ListingDetails {
        description: seed.description.to_string(),
        review_count: seed.review_count,
        verified: seed.verified,
        room_types: seed.room_types.iter().map(|r| r.to_string()).collect(),
        landlord: Some(Landlord {
            name: seed.landlord.name.to_string(),
            properties: seed.landlord.properties,
            member_since: seed.landlord.member_since.to_string(),
        }),
        reviews: seed
            .reviews
            .iter()
            .map(|review| Review {
                user_name: review.user_name.to_string(),
                rating: review.rating,
                date: review.date.to_string(),
                comment: review.comment.to_string(),
            })
            .collect(),
    }
}
