//! Name tables grouped by cultural region.

use crate::name::Region;

/// Every table backing name generation for one region.
pub(crate) struct RegionNames {
    pub(crate) male_first: &'static [&'static str],
    pub(crate) female_first: &'static [&'static str],
    pub(crate) last: &'static [&'static str],
    pub(crate) titles: &'static [&'static str],
}

/// Returns the tables for a region.
pub(crate) const fn region_names(region: Region) -> &'static RegionNames {
    match region {
        Region::Nigerian => &NIGERIAN,
        Region::Arabic => &ARABIC,
        Region::Western => &WESTERN,
        Region::Asian => &ASIAN,
        Region::European => &EUROPEAN,
    }
}

/// Middle names shared across every region.
pub(crate) const MIDDLE_NAMES: &[&str] = &[
    "Ade", "Mohammed", "James", "Lee", "Xiao", "Jean", "Marie", "Anne", "Lynn", "Grace", "David",
    "Michael", "John", "William", "Robert", "Fatima", "Aisha", "Chinedu", "Oluwatobi", "Emeka",
    "Yong", "Min", "Wei", "Jian", "Hao", "Giovanni", "Marco", "Pierre", "Hans", "Ivan", "Olga",
    "Sophie", "Mei", "Hana", "Priya",
];

static NIGERIAN: RegionNames = RegionNames {
    male_first: &[
        "Chinedu", "Emeka", "Oluwatobi", "Adebayo", "Chukwuemeka", "Obinna", "Ifeanyi", "Abdul",
        "Musa", "Yusuf", "Ibrahim", "Olumide", "Adetokunbo", "Okechukwu", "Nnamdi", "Eze", "Tunde",
        "Kayode", "Femi", "Segun", "Kunle", "Babatunde", "Wale", "Dayo", "Jide",
    ],
    female_first: &[
        "Amina", "Fatima", "Zainab", "Chioma", "Ngozi", "Aisha", "Funke", "Blessing", "Grace",
        "Mercy", "Patience", "Esther", "Rahama", "Halima", "Maryam", "Olamide", "Adesuwa", "Efe",
        "Titilayo", "Yewande", "Folake", "Bimpe", "Ronke", "Simisola", "Temilade",
    ],
    last: &[
        "Okoro", "Adeyemi", "Okafor", "Ibrahim", "Bello", "Abdullahi", "Ogunlesi", "Nwachukwu",
        "Onyema", "Eze", "Adeleke", "Balogun", "Obi", "Okonkwo", "Uche", "Mohammed", "Sani",
        "Abubakar", "Yakubu", "Ojo", "Adewale", "Oladipo", "Akintola", "Bankole", "Oyinlola",
    ],
    titles: &[
        "Chief", "Alhaji", "Dr.", "Engr.", "Prof.", "Barr.", "Pastor", "Imam", "Oba", "Eze",
        "Olori", "Iyaloja", "Alhaja", "Madam", "Sir",
    ],
};

static ARABIC: RegionNames = RegionNames {
    male_first: &[
        "Mohammed", "Ahmed", "Ali", "Omar", "Youssef", "Mahmoud", "Khalid", "Abdullah", "Mustafa",
        "Ibrahim", "Hamza", "Tariq", "Yahya", "Hassan", "Hussein", "Zaid", "Samir", "Naser",
        "Faisal", "Waleed", "Karim", "Adel", "Rashid", "Salim", "Jamal",
    ],
    female_first: &[
        "Aisha", "Fatima", "Layla", "Mariam", "Noor", "Amal", "Huda", "Zahra", "Samira", "Farida",
        "Salma", "Yasmin", "Leila", "Nadia", "Rania", "Dalia", "Hanan", "Jameela", "Karima",
        "Mona", "Nawal", "Rasha", "Sana", "Wafa", "Zain",
    ],
    last: &[
        "Al-Saud", "Al-Farsi", "Khan", "Al-Maktoum", "Hassan", "Abbas", "Abdul", "Al-Masri",
        "Al-Qurashi", "Al-Najjar", "Al-Sharif", "Al-Baghdadi", "Al-Hashimi", "Al-Ghamdi",
        "Al-Obeidi", "Al-Zahrani", "Al-Amri", "Al-Shammari", "Al-Qahtani", "Al-Dosari",
        "Al-Harbi", "Al-Juhani", "Al-Sulami", "Al-Yami", "Al-Zahawi",
    ],
    titles: &[
        "Sheikh", "Dr.", "Prof.", "Hajji", "Sayyid", "Imam", "Ustadh", "Amir", "Mufti", "Qadi",
        "Hakim", "Ra'is", "Basha", "Effendi", "Mawlana",
    ],
};

static WESTERN: RegionNames = RegionNames {
    male_first: &[
        "John", "Michael", "David", "James", "Robert", "William", "Richard", "Joseph", "Thomas",
        "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Donald", "Mark", "Paul",
        "Steven", "Andrew", "Kenneth", "George", "Joshua", "Kevin", "Brian", "Edward",
    ],
    female_first: &[
        "Mary", "Jennifer", "Lisa", "Sarah", "Emily", "Jessica", "Amanda", "Melissa", "Nicole",
        "Elizabeth", "Michelle", "Ashley", "Stephanie", "Rebecca", "Laura", "Kimberly", "Amber",
        "Rachel", "Heather", "Danielle", "Christina", "Tiffany", "Samantha", "Katherine",
        "Victoria",
    ],
    last: &[
        "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Garcia", "Rodriguez",
        "Wilson", "Martinez", "Anderson", "Taylor", "Thomas", "Hernandez", "Moore", "Martin",
        "Jackson", "Thompson", "White", "Lopez", "Lee", "Gonzalez", "Harris", "Clark",
    ],
    titles: &[
        "Mr.", "Mrs.", "Ms.", "Dr.", "Prof.", "Rev.", "Hon.", "Sen.", "Gov.", "Pres.", "Capt.",
        "Col.", "Gen.", "Judge", "Sir",
    ],
};

static ASIAN: RegionNames = RegionNames {
    male_first: &[
        "Wei", "Jian", "Min", "Hao", "Yong", "Takeshi", "Hiroshi", "Kenji", "Ryota", "Daichi",
        "Min-ho", "Ji-hoon", "Seung", "Joon", "Hyun", "Raj", "Aarav", "Vihaan", "Arjun", "Aditya",
        "Chen", "Li", "Zhang", "Wang", "Bo",
    ],
    female_first: &[
        "Mei", "Ling", "Xia", "Yan", "Li", "Hana", "Yui", "Sakura", "Aoi", "Rin", "Ji-woo",
        "Seo-yeon", "Min-ji", "Hye-jin", "Eun-ji", "Priya", "Ananya", "Diya", "Aanya", "Ishita",
        "Ying", "Fang", "Jing", "Lan", "Xiu",
    ],
    last: &[
        "Wang", "Li", "Zhang", "Liu", "Chen", "Tanaka", "Sato", "Suzuki", "Takahashi", "Watanabe",
        "Kim", "Lee", "Park", "Choi", "Jung", "Patel", "Singh", "Kumar", "Sharma", "Gupta",
        "Nguyen", "Tran", "Le", "Pham", "Hoang",
    ],
    titles: &[
        "Dr.", "Prof.", "Mr.", "Mrs.", "Ms.", "Shifu", "Sensei", "Sifu", "Guru", "Pandit",
        "Acharya", "Swami", "Baba", "Lao", "Xiansheng",
    ],
};

static EUROPEAN: RegionNames = RegionNames {
    male_first: &[
        "Jean", "Pierre", "Michel", "André", "Philippe", "Giovanni", "Marco", "Luca", "Alessandro",
        "Matteo", "Hans", "Peter", "Thomas", "Michael", "Andreas", "Ivan", "Sergey", "Dmitri",
        "Alexei", "Mikhail", "Carlos", "Javier", "Miguel", "Antonio", "Juan",
    ],
    female_first: &[
        "Marie", "Sophie", "Isabelle", "Nathalie", "Valérie", "Giulia", "Sofia", "Alessia",
        "Chiara", "Elena", "Anna", "Maria", "Christine", "Petra", "Sabine", "Olga", "Irina",
        "Natalia", "Svetlana", "Carmen", "Isabel", "Ana", "Lucia", "Greta", "Ingrid",
    ],
    last: &[
        "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Rossi", "Ferrari", "Russo", "Bianchi",
        "Romano", "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Ivanov", "Smirnov",
        "Kuznetsov", "Popov", "Sokolov", "Garcia", "Rodriguez", "Gonzalez", "Fernandez", "Lopez",
    ],
    titles: &[
        "Herr", "Frau", "Dr.", "Prof.", "M.", "Mme", "Mlle", "Sig.", "Dott.", "Ing.", "Mag.",
        "Dr.med.", "Lic.", "Arch.", "Avv.",
    ],
};
