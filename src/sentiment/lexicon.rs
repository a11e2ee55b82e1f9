//! Word tables for both scorers.
//!
//! Valences for the intensity scorer are on the -4..=4 scale; the polarity
//! table carries `(polarity, subjectivity)` pairs on -1..=1 / 0..=1.

pub const VALENCES: &[(&str, f64)] = &[
    ("abandoned", -2.1),
    ("absurd", -1.3),
    ("accept", 1.6),
    ("accident", -2.1),
    ("adorable", 2.2),
    ("adore", 2.6),
    ("adventure", 1.3),
    ("afraid", -2.2),
    ("agony", -1.8),
    ("agree", 1.5),
    ("alarmed", -1.4),
    ("alone", -1.0),
    ("alright", 1.0),
    ("amazing", 2.8),
    ("anger", -2.7),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.8),
    ("anxious", -1.0),
    ("applause", 1.8),
    ("appreciate", 1.7),
    ("argue", -1.6),
    ("argument", -1.5),
    ("ashamed", -2.1),
    ("attractive", 1.9),
    ("awesome", 3.1),
    ("awful", -2.0),
    ("awkward", -0.6),
    ("bad", -2.5),
    ("bastard", -2.5),
    ("beautiful", 2.9),
    ("beloved", 2.3),
    ("best", 3.2),
    ("betrayed", -3.0),
    ("better", 1.9),
    ("bitch", -2.8),
    ("bless", 1.8),
    ("blessed", 2.9),
    ("bored", -1.1),
    ("boring", -1.3),
    ("brave", 2.4),
    ("brilliant", 2.8),
    ("broke", -1.8),
    ("broken", -2.1),
    ("calm", 1.3),
    ("care", 2.2),
    ("celebrate", 2.7),
    ("charming", 2.8),
    ("cheat", -2.0),
    ("cheated", -1.9),
    ("cheer", 2.3),
    ("cheerful", 2.5),
    ("comfort", 1.5),
    ("confused", -1.3),
    ("congrats", 2.4),
    ("congratulations", 2.9),
    ("cool", 1.3),
    ("crap", -1.6),
    ("crazy", -1.4),
    ("creepy", -1.6),
    ("cry", -2.1),
    ("crying", -2.1),
    ("cute", 2.0),
    ("damage", -2.2),
    ("damn", -1.7),
    ("dead", -3.3),
    ("dear", 1.6),
    ("death", -2.9),
    ("delighted", 2.3),
    ("depressed", -2.3),
    ("desperate", -1.3),
    ("destroy", -2.5),
    ("die", -2.9),
    ("disappointed", -1.9),
    ("disaster", -3.1),
    ("disgust", -2.9),
    ("disgusting", -2.4),
    ("divorce", -2.0),
    ("dream", 1.0),
    ("dumb", -2.3),
    ("dumped", -1.7),
    ("easy", 1.9),
    ("embarrassed", -1.5),
    ("embarrassing", -1.6),
    ("enemy", -2.5),
    ("enjoy", 2.2),
    ("evil", -3.4),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fabulous", 2.4),
    ("fail", -2.5),
    ("failed", -2.3),
    ("fair", 1.3),
    ("faithful", 1.9),
    ("fantastic", 2.6),
    ("fault", -1.7),
    ("favorite", 2.0),
    ("fear", -2.2),
    ("fight", -1.6),
    ("fine", 0.8),
    ("fired", -2.6),
    ("forgive", 1.1),
    ("freak", -1.9),
    ("free", 2.3),
    ("friend", 2.2),
    ("friendly", 2.2),
    ("friends", 2.1),
    ("frightened", -1.9),
    ("frustrated", -2.4),
    ("fun", 2.3),
    ("funny", 1.9),
    ("furious", -2.7),
    ("genius", 1.9),
    ("gift", 1.9),
    ("giggle", 1.8),
    ("glad", 2.0),
    ("god", 1.1),
    ("good", 1.9),
    ("gorgeous", 3.0),
    ("grateful", 2.0),
    ("great", 3.1),
    ("grief", -2.2),
    ("grin", 2.1),
    ("gross", -2.1),
    ("guilty", -1.8),
    ("haha", 2.0),
    ("hahaha", 2.6),
    ("handsome", 2.2),
    ("happiness", 2.6),
    ("happy", 2.7),
    ("hate", -2.7),
    ("hated", -3.2),
    ("heartbroken", -3.3),
    ("hell", -3.6),
    ("help", 1.7),
    ("hero", 2.6),
    ("hilarious", 1.7),
    ("honest", 2.3),
    ("hooray", 2.4),
    ("hope", 1.9),
    ("hopeful", 1.6),
    ("horrible", -2.5),
    ("hug", 2.1),
    ("hugs", 2.1),
    ("hurt", -2.4),
    ("idiot", -2.3),
    ("important", 0.8),
    ("insane", -1.7),
    ("insult", -2.3),
    ("jealous", -2.0),
    ("jerk", -2.2),
    ("joke", 1.2),
    ("joy", 2.8),
    ("kidding", 0.4),
    ("kill", -3.7),
    ("kiss", 1.8),
    ("lame", -1.8),
    ("laugh", 2.6),
    ("liar", -2.4),
    ("like", 2.0),
    ("lol", 2.9),
    ("lonely", -1.5),
    ("lose", -1.6),
    ("loser", -2.4),
    ("lost", -1.3),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loves", 2.7),
    ("lucky", 1.8),
    ("lying", -2.4),
    ("mad", -2.2),
    ("mean", -1.2),
    ("mess", -1.5),
    ("miserable", -2.2),
    ("miss", -0.6),
    ("mistake", -1.4),
    ("nasty", -2.6),
    ("nervous", -1.1),
    ("nice", 1.8),
    ("nightmare", -2.7),
    ("no", -1.2),
    ("ok", 1.2),
    ("okay", 0.9),
    ("pain", -2.3),
    ("painful", -2.2),
    ("panic", -2.3),
    ("party", 1.7),
    ("pathetic", -2.6),
    ("peace", 2.5),
    ("perfect", 2.7),
    ("pissed", -3.2),
    ("pity", -1.2),
    ("please", 1.3),
    ("pleased", 1.9),
    ("pleasure", 2.7),
    ("poor", -2.1),
    ("pretty", 2.2),
    ("problem", -1.7),
    ("promise", 1.3),
    ("proud", 2.1),
    ("rejected", -2.1),
    ("relax", 1.9),
    ("relief", 2.1),
    ("respect", 2.1),
    ("ridiculous", -1.5),
    ("romantic", 2.3),
    ("rude", -2.0),
    ("ruin", -2.8),
    ("ruined", -2.1),
    ("sad", -2.1),
    ("safe", 1.9),
    ("scared", -1.9),
    ("scary", -2.2),
    ("scream", -1.7),
    ("screw", -0.4),
    ("screwed", -1.5),
    ("sexy", 2.4),
    ("shit", -2.6),
    ("shock", -1.6),
    ("shocked", -1.3),
    ("shut", -0.8),
    ("sick", -2.3),
    ("smart", 1.7),
    ("smile", 1.5),
    ("sorry", -0.3),
    ("special", 1.7),
    ("stressed", -1.4),
    ("strong", 2.3),
    ("stupid", -2.4),
    ("success", 2.7),
    ("suck", -1.9),
    ("sucks", -1.5),
    ("suffer", -2.5),
    ("super", 2.9),
    ("surprise", 1.1),
    ("sweet", 2.0),
    ("sweetie", 2.2),
    ("terrible", -2.1),
    ("terrific", 3.2),
    ("terrified", -3.0),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("thrilled", 2.5),
    ("tired", -1.9),
    ("tragic", -3.4),
    ("trouble", -1.7),
    ("trust", 2.3),
    ("ugly", -2.3),
    ("unhappy", -1.8),
    ("upset", -1.6),
    ("useless", -1.8),
    ("victory", 2.8),
    ("waste", -1.8),
    ("weak", -1.9),
    ("weird", -0.7),
    ("welcome", 2.0),
    ("win", 2.8),
    ("wise", 1.8),
    ("wonderful", 2.7),
    ("woo", 2.1),
    ("woohoo", 2.3),
    ("worried", -1.2),
    ("worry", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wow", 2.8),
    ("wrong", -2.1),
    ("yay", 2.4),
    ("yeah", 1.2),
    ("yes", 1.7),
    ("yummy", 2.4),
];

pub const BOOST_UP: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly", "deeply",
    "enormously", "entirely", "especially", "exceptionally", "extremely", "fabulously", "freaking",
    "fully", "greatly", "highly", "hugely", "incredibly", "intensely", "majorly", "more", "most",
    "particularly", "purely", "quite", "really", "remarkably", "so", "substantially", "thoroughly",
    "totally", "tremendously", "unbelievably", "unusually", "utterly", "very",
];

pub const BOOST_DOWN: &[&str] = &[
    "almost", "barely", "hardly", "kinda", "less", "little", "marginally", "occasionally", "partly",
    "scarcely", "slightly", "somewhat", "sorta",
];

pub const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "didnt", "doesnt", "dont", "hadnt", "hasnt",
    "havent", "isnt", "mightnt", "mustnt", "neither", "never", "nope", "nor", "not", "nothing",
    "nowhere", "shouldnt", "wasnt", "werent", "without", "wont", "wouldnt", "rarely", "seldom",
];

/// `(word, polarity, subjectivity)`.
pub const POLARITIES: &[(&str, f64, f64)] = &[
    ("adorable", 0.5, 1.0),
    ("afraid", -0.6, 0.9),
    ("amazing", 0.6, 0.9),
    ("angry", -0.5, 1.0),
    ("annoying", -0.8, 0.9),
    ("attractive", 0.7, 0.8),
    ("awesome", 1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.667),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("boring", -1.0, 1.0),
    ("brave", 0.8, 1.0),
    ("brilliant", 0.9, 1.0),
    ("calm", 0.3, 0.75),
    ("comfortable", 0.4, 0.7),
    ("confused", -0.4, 0.7),
    ("cool", 0.35, 0.65),
    ("crappy", -0.8, 0.8),
    ("crazy", -0.6, 0.9),
    ("creepy", -0.5, 0.9),
    ("cute", 0.5, 1.0),
    ("dead", -0.2, 0.4),
    ("delicious", 1.0, 1.0),
    ("depressed", -0.6, 0.9),
    ("desperate", -0.6, 0.9),
    ("difficult", -0.5, 1.0),
    ("disappointed", -0.75, 0.75),
    ("disgusting", -1.0, 1.0),
    ("dumb", -0.375, 0.5),
    ("easy", 0.433, 0.833),
    ("embarrassing", -0.5, 0.8),
    ("evil", -1.0, 1.0),
    ("excellent", 1.0, 1.0),
    ("excited", 0.375, 0.75),
    ("exciting", 0.3, 0.8),
    ("fabulous", 0.4, 0.9),
    ("fair", 0.7, 0.9),
    ("famous", 0.5, 1.0),
    ("fantastic", 0.4, 0.9),
    ("favorite", 0.5, 1.0),
    ("fine", 0.4167, 0.5),
    ("free", 0.4, 0.8),
    ("friendly", 0.375, 0.5),
    ("fun", 0.3, 0.2),
    ("funny", 0.25, 0.75),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("gorgeous", 0.7, 1.0),
    ("great", 0.8, 0.75),
    ("gross", -0.8, 1.0),
    ("handsome", 0.5, 1.0),
    ("happy", 0.8, 1.0),
    ("hard", -0.292, 0.542),
    ("hate", -0.8, 0.9),
    ("hilarious", 0.5, 1.0),
    ("honest", 0.6, 0.9),
    ("horrible", -1.0, 1.0),
    ("hot", 0.25, 0.85),
    ("important", 0.4, 1.0),
    ("insane", -1.0, 1.0),
    ("interesting", 0.5, 0.5),
    ("jealous", -0.5, 0.8),
    ("lame", -0.5, 0.75),
    ("lonely", -0.1, 0.4),
    ("love", 0.5, 0.6),
    ("lovely", 0.5, 0.75),
    ("lucky", 0.333, 1.0),
    ("mad", -0.625, 1.0),
    ("mean", -0.3125, 0.6875),
    ("miserable", -1.0, 1.0),
    ("nasty", -1.0, 1.0),
    ("nice", 0.6, 1.0),
    ("nightmare", -0.5, 0.8),
    ("okay", 0.5, 0.5),
    ("pathetic", -1.0, 1.0),
    ("perfect", 1.0, 1.0),
    ("pleased", 0.5, 1.0),
    ("poor", -0.4, 0.6),
    ("pretty", 0.25, 1.0),
    ("proud", 0.8, 1.0),
    ("ridiculous", -0.333, 1.0),
    ("romantic", 0.35, 0.55),
    ("rude", -0.3, 0.6),
    ("sad", -0.5, 1.0),
    ("scared", -0.5, 0.8),
    ("scary", -0.5, 1.0),
    ("serious", -0.333, 0.667),
    ("sexy", 0.5, 1.0),
    ("sick", -0.714, 0.857),
    ("smart", 0.214, 0.643),
    ("sorry", -0.5, 1.0),
    ("special", 0.357, 0.571),
    ("strong", 0.433, 0.733),
    ("stupid", -0.8, 1.0),
    ("sure", 0.5, 0.889),
    ("sweet", 0.35, 0.65),
    ("terrible", -1.0, 1.0),
    ("terrific", 1.0, 1.0),
    ("tired", -0.4, 0.7),
    ("ugly", -0.7, 1.0),
    ("unhappy", -0.6, 0.9),
    ("upset", -0.5, 0.5),
    ("useless", -0.5, 0.2),
    ("weird", -0.5, 1.0),
    ("wise", 0.7, 0.9),
    ("wonderful", 1.0, 1.0),
    ("worried", -0.5, 1.0),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
];

/// Adverbs that scale the next polarity word.
pub const INTENSIFIERS: &[(&str, f64)] = &[
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("quite", 1.1),
    ("really", 1.2),
    ("so", 1.3),
    ("too", 1.2),
    ("totally", 1.4),
    ("very", 1.3),
];
