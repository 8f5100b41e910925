pub struct SampleProduct {
    pub name: &'static str,
    pub image_url: &'static str,
    pub count: i32,
    pub width: i32,
    pub height: i32,
    pub weight: &'static str,
}

pub struct SampleComment {
    /// Index into [`SAMPLE_PRODUCTS`].
    pub product: usize,
    pub description: &'static str,
    pub date: &'static str,
}

pub const SAMPLE_PRODUCTS: [SampleProduct; 2] = [
    SampleProduct {
        name: "Sample Product 1",
        image_url: "https://via.placeholder.com/200x200",
        count: 10,
        width: 200,
        height: 200,
        weight: "200g",
    },
    SampleProduct {
        name: "Sample Product 2",
        image_url: "https://via.placeholder.com/300x300",
        count: 5,
        width: 300,
        height: 300,
        weight: "300g",
    },
];

pub const SAMPLE_COMMENTS: [SampleComment; 3] = [
    SampleComment {
        product: 0,
        description: "Great product!",
        date: "14:00 22.08.2021",
    },
    SampleComment {
        product: 1,
        description: "Excellent service",
        date: "16:00 22.08.2021",
    },
    SampleComment {
        product: 0,
        description: "Very satisfied with the quality",
        date: "15:30 22.08.2021",
    },
];
