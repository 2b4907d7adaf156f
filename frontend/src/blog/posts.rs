pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub date: &'static str,
    pub sections: &'static [(&'static str, &'static str)],
}

pub const POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "will-vs-living-trust",
        title: "Will or Living Trust? How to Decide",
        summary: "Both put your wishes on paper. Only one keeps your family out of probate. Here is how we help clients choose.",
        date: "September 2, 2025",
        sections: &[
            ("What a will does", "A will names who receives your property and who looks after minor children. It only takes effect through probate, a court process that is public and can take many months."),
            ("What a living trust adds", "A revocable living trust holds assets during your lifetime and passes them to your beneficiaries without probate. You stay in control as trustee while you are alive and well."),
            ("Which one fits", "Families with real estate in more than one state, a blended family, or a wish for privacy usually benefit from a trust. Most people still keep a short 'pour-over' will alongside it."),
        ],
    },
    BlogPost {
        slug: "five-documents-every-family-needs",
        title: "Five Documents Every Family Needs",
        summary: "A short checklist that covers incapacity as well as death, the half of estate planning most people forget.",
        date: "August 12, 2025",
        sections: &[
            ("The checklist", "A will, a revocable trust where it makes sense, a durable financial power of attorney, a healthcare proxy with a living will, and current beneficiary designations on every account."),
            ("Why incapacity matters", "Without powers of attorney, a spouse or child may need a court guardianship to pay your bills or speak to your doctors. The documents are simple; the alternative is not."),
        ],
    },
    BlogPost {
        slug: "talking-to-adult-children-about-your-estate",
        title: "Talking to Your Adult Children About Your Estate",
        summary: "The plan matters, but so does the conversation. A few approaches that keep the family meeting calm.",
        date: "July 21, 2025",
        sections: &[
            ("Start with values, not numbers", "Explain what you want your legacy to accomplish before anyone sees a balance sheet. Children respond better to intentions than to percentages."),
            ("Bring in a neutral voice", "An advisor in the room can answer technical questions and keep the discussion on the plan instead of old family history."),
        ],
    },
];

pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|post| post.slug == slug)
}
