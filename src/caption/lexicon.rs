/// Word valences on a -4..=4 scale. Lowercase keys.
pub const VALENCES: &[(&str, f64)] = &[
    ("abandon", -1.9),
    ("accomplish", 1.8),
    ("admire", 2.1),
    ("adorable", 2.2),
    ("agree", 1.5),
    ("amazing", 2.8),
    ("angry", -2.3),
    ("annoying", -1.7),
    ("anxious", -1.0),
    ("appreciate", 1.7),
    ("awesome", 3.1),
    ("awful", -2.0),
    ("bad", -2.5),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("boring", -1.3),
    ("brilliant", 2.8),
    ("broken", -1.7),
    ("bug", -0.9),
    ("buggy", -1.5),
    ("calm", 1.3),
    ("celebrate", 2.7),
    ("clean", 1.7),
    ("clever", 2.0),
    ("comfortable", 1.5),
    ("confused", -1.3),
    ("cool", 1.3),
    ("crash", -1.7),
    ("crisis", -3.1),
    ("cruel", -2.8),
    ("damage", -2.2),
    ("danger", -2.4),
    ("dead", -3.3),
    ("delight", 2.9),
    ("difficult", -1.5),
    ("disappointed", -1.9),
    ("disaster", -3.1),
    ("dislike", -1.6),
    ("easy", 1.9),
    ("efficient", 1.8),
    ("elegant", 2.1),
    ("enjoy", 2.2),
    ("error", -1.7),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fantastic", 2.6),
    ("fast", 0.9),
    ("favorite", 2.0),
    ("fear", -2.2),
    ("fine", 0.8),
    ("flawless", 2.3),
    ("fragile", -0.8),
    ("friendly", 2.2),
    ("frustrating", -1.9),
    ("fun", 2.3),
    ("gentle", 1.9),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("hard", -0.4),
    ("harm", -2.5),
    ("hate", -2.7),
    ("helpful", 1.8),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("ideal", 2.4),
    ("impressive", 2.3),
    ("improve", 1.9),
    ("incredible", 3.4),
    ("innovative", 1.9),
    ("interesting", 1.7),
    ("joy", 2.8),
    ("kill", -3.7),
    ("lame", -1.8),
    ("like", 1.5),
    ("love", 3.2),
    ("lovely", 2.8),
    ("mess", -1.5),
    ("miserable", -2.2),
    ("nice", 1.8),
    ("outstanding", 3.0),
    ("pain", -2.3),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("poor", -2.1),
    ("popular", 1.8),
    ("powerful", 1.8),
    ("praise", 2.6),
    ("problem", -1.7),
    ("reliable", 1.7),
    ("robust", 1.6),
    ("sad", -2.1),
    ("safe", 1.9),
    ("scary", -2.2),
    ("secure", 1.4),
    ("simple", 0.9),
    ("slow", -0.6),
    ("smart", 1.7),
    ("solid", 1.5),
    ("strong", 2.3),
    ("stupid", -2.4),
    ("success", 2.7),
    ("successful", 2.8),
    ("superb", 3.1),
    ("terrible", -2.1),
    ("threat", -2.4),
    ("thrilled", 2.6),
    ("tragic", -3.4),
    ("trouble", -1.7),
    ("ugly", -2.3),
    ("unhappy", -1.8),
    ("useful", 1.9),
    ("useless", -1.8),
    ("vulnerable", -0.9),
    ("weak", -1.9),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
];

/// Intensity modifiers: `true` boosts, `false` dampens.
pub const BOOSTERS: &[(&str, bool)] = &[
    ("absolutely", true),
    ("amazingly", true),
    ("completely", true),
    ("considerably", true),
    ("deeply", true),
    ("enormously", true),
    ("especially", true),
    ("extremely", true),
    ("greatly", true),
    ("highly", true),
    ("hugely", true),
    ("incredibly", true),
    ("particularly", true),
    ("really", true),
    ("remarkably", true),
    ("so", true),
    ("totally", true),
    ("tremendously", true),
    ("truly", true),
    ("very", true),
    ("barely", false),
    ("hardly", false),
    ("marginally", false),
    ("occasionally", false),
    ("partly", false),
    ("scarcely", false),
    ("slightly", false),
    ("somewhat", false),
];

pub const NEGATIONS: &[&str] = &[
    "aint", "cannot", "cant", "darent", "dont", "doesnt", "didnt", "hadnt", "hasnt",
    "havent", "isnt", "neither", "never", "no", "nobody", "none", "nope", "nor",
    "not", "nothing", "nowhere", "wasnt", "werent", "without", "wont", "wouldnt",
];
