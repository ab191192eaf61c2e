//! The 64 hexagrams in King Wen order.
//!
//! Judgment and image texts are condensed renderings of the traditional
//! commentary, used both as generation context and as the source of the
//! static interpretation.

use super::Hexagram;
use crate::trigram::Trigram::{Earth, Fire, Heaven, Lake, Mountain, Thunder, Water, Wind};

pub(super) const TABLE: [Hexagram; 64] = [
    Hexagram {
        number: 1,
        name: "The Creative",
        pinyin: "Qian",
        character: "乾",
        upper: Heaven,
        lower: Heaven,
        judgment: "Sublime success through perseverance. Creative power works without pause when it keeps to what is right.",
        image: "Heaven moves with unceasing strength; so the superior person makes themself strong and untiring.",
        keywords: &["initiative", "strength", "leadership", "persistence"],
    },
    Hexagram {
        number: 2,
        name: "The Receptive",
        pinyin: "Kun",
        character: "坤",
        upper: Earth,
        lower: Earth,
        judgment: "Success through the perseverance of a mare. Leading brings confusion; following finds guidance. Quiet steadiness is fortunate.",
        image: "The earth's condition is receptive devotion; so the superior person carries the outer world with breadth of character.",
        keywords: &["devotion", "yielding", "support", "patience"],
    },
    Hexagram {
        number: 3,
        name: "Difficulty at the Beginning",
        pinyin: "Zhun",
        character: "屯",
        upper: Water,
        lower: Thunder,
        judgment: "Supreme success furthered by perseverance. Do not rush forward; it pays to appoint helpers.",
        image: "Clouds and thunder: the image of initial difficulty. The superior person brings order out of confusion.",
        keywords: &["beginnings", "chaos", "perseverance", "help"],
    },
    Hexagram {
        number: 4,
        name: "Youthful Folly",
        pinyin: "Meng",
        character: "蒙",
        upper: Mountain,
        lower: Water,
        judgment: "Success. It is not I who seek the young fool; the young fool seeks me. The first question is answered; importunity is not.",
        image: "A spring wells up at the foot of the mountain; the superior person fosters character through thoroughness.",
        keywords: &["learning", "inexperience", "teaching", "humility"],
    },
    Hexagram {
        number: 5,
        name: "Waiting",
        pinyin: "Xu",
        character: "需",
        upper: Water,
        lower: Heaven,
        judgment: "With sincerity there is light and success. Perseverance brings good fortune; it furthers one to cross the great water.",
        image: "Clouds rise up to heaven; the superior person eats and drinks, is joyous and of good cheer.",
        keywords: &["patience", "nourishment", "timing", "confidence"],
    },
    Hexagram {
        number: 6,
        name: "Conflict",
        pinyin: "Song",
        character: "訟",
        upper: Heaven,
        lower: Water,
        judgment: "Sincerity is obstructed. A cautious halt halfway brings good fortune; going through to the end brings misfortune.",
        image: "Heaven and water go their opposite ways; the superior person carefully considers the beginning of every undertaking.",
        keywords: &["dispute", "caution", "compromise", "mediation"],
    },
    Hexagram {
        number: 7,
        name: "The Army",
        pinyin: "Shi",
        character: "師",
        upper: Earth,
        lower: Water,
        judgment: "The army needs perseverance and a strong leader. Good fortune without blame.",
        image: "Water in the midst of the earth; the superior person increases the masses through generosity toward the people.",
        keywords: &["discipline", "organisation", "leadership", "collective effort"],
    },
    Hexagram {
        number: 8,
        name: "Holding Together",
        pinyin: "Bi",
        character: "比",
        upper: Water,
        lower: Earth,
        judgment: "Holding together brings good fortune. Inquire of the oracle again whether you possess constancy; latecomers meet misfortune.",
        image: "Water on the earth; the ancient kings bestowed lands and cultivated friendly relations with the feudal lords.",
        keywords: &["union", "alliance", "belonging", "loyalty"],
    },
    Hexagram {
        number: 9,
        name: "The Taming Power of the Small",
        pinyin: "Xiao Chu",
        character: "小畜",
        upper: Wind,
        lower: Heaven,
        judgment: "Success. Dense clouds, no rain from our western region. Small restraints gently shape what cannot yet be forced.",
        image: "The wind drives across heaven; the superior person refines the outward aspect of their nature.",
        keywords: &["restraint", "gentleness", "accumulation", "detail"],
    },
    Hexagram {
        number: 10,
        name: "Treading",
        pinyin: "Lu",
        character: "履",
        upper: Heaven,
        lower: Lake,
        judgment: "Treading upon the tail of the tiger; it does not bite. Success through courteous conduct.",
        image: "Heaven above, the lake below; the superior person discriminates between high and low and steadies the people's aims.",
        keywords: &["conduct", "propriety", "caution", "respect"],
    },
    Hexagram {
        number: 11,
        name: "Peace",
        pinyin: "Tai",
        character: "泰",
        upper: Earth,
        lower: Heaven,
        judgment: "The small departs, the great approaches. Good fortune and success.",
        image: "Heaven and earth unite; the ruler divides and completes their course and aids the people.",
        keywords: &["harmony", "prosperity", "balance", "flourishing"],
    },
    Hexagram {
        number: 12,
        name: "Standstill",
        pinyin: "Pi",
        character: "否",
        upper: Heaven,
        lower: Earth,
        judgment: "Evil people do not further the perseverance of the superior person. The great departs, the small approaches.",
        image: "Heaven and earth do not unite; the superior person falls back on inner worth to escape the difficulties.",
        keywords: &["stagnation", "obstruction", "withdrawal", "integrity"],
    },
    Hexagram {
        number: 13,
        name: "Fellowship with Men",
        pinyin: "Tong Ren",
        character: "同人",
        upper: Heaven,
        lower: Fire,
        judgment: "Fellowship in the open brings success. It furthers one to cross the great water and to persevere as a superior person.",
        image: "Heaven together with fire; the superior person organises the clans and makes distinctions between things.",
        keywords: &["community", "openness", "shared purpose", "cooperation"],
    },
    Hexagram {
        number: 14,
        name: "Possession in Great Measure",
        pinyin: "Da You",
        character: "大有",
        upper: Fire,
        lower: Heaven,
        judgment: "Supreme success. Great wealth held with modesty and clarity.",
        image: "Fire in heaven above; the superior person curbs evil, furthers good and obeys the benevolent will of heaven.",
        keywords: &["abundance", "wealth", "generosity", "clarity"],
    },
    Hexagram {
        number: 15,
        name: "Modesty",
        pinyin: "Qian",
        character: "謙",
        upper: Earth,
        lower: Mountain,
        judgment: "Modesty creates success. The superior person carries things through.",
        image: "Within the earth, a mountain; the superior person reduces what is too much, augments what is too little and balances things.",
        keywords: &["humility", "balance", "moderation", "sincerity"],
    },
    Hexagram {
        number: 16,
        name: "Enthusiasm",
        pinyin: "Yu",
        character: "豫",
        upper: Thunder,
        lower: Earth,
        judgment: "It furthers one to install helpers and to set armies marching. Enthusiasm that moves with the times finds support.",
        image: "Thunder comes resounding out of the earth; the ancient kings made music to honour merit.",
        keywords: &["inspiration", "readiness", "music", "momentum"],
    },
    Hexagram {
        number: 17,
        name: "Following",
        pinyin: "Sui",
        character: "隨",
        upper: Lake,
        lower: Thunder,
        judgment: "Supreme success. Perseverance furthers. No blame.",
        image: "Thunder in the middle of the lake; at nightfall the superior person goes indoors for rest and recuperation.",
        keywords: &["adaptation", "following", "rest", "responsiveness"],
    },
    Hexagram {
        number: 18,
        name: "Work on What Has Been Spoiled",
        pinyin: "Gu",
        character: "蠱",
        upper: Mountain,
        lower: Wind,
        judgment: "Supreme success. It furthers one to cross the great water. Before the starting point, three days; after the starting point, three days.",
        image: "The wind blows low on the mountain; the superior person stirs up the people and strengthens their spirit.",
        keywords: &["repair", "decay", "renewal", "responsibility"],
    },
    Hexagram {
        number: 19,
        name: "Approach",
        pinyin: "Lin",
        character: "臨",
        upper: Earth,
        lower: Lake,
        judgment: "Supreme success through perseverance. When the eighth month comes there will be misfortune.",
        image: "The earth above the lake; the superior person is inexhaustible in teaching and boundless in care for the people.",
        keywords: &["approach", "growth", "care", "opportunity"],
    },
    Hexagram {
        number: 20,
        name: "Contemplation",
        pinyin: "Guan",
        character: "觀",
        upper: Wind,
        lower: Earth,
        judgment: "The ablution has been made but not yet the offering. Full of trust, they look up to it.",
        image: "The wind blows over the earth; the ancient kings visited the regions of the world and contemplated the people.",
        keywords: &["observation", "reflection", "example", "perspective"],
    },
    Hexagram {
        number: 21,
        name: "Biting Through",
        pinyin: "Shi He",
        character: "噬嗑",
        upper: Fire,
        lower: Thunder,
        judgment: "Success. It is favourable to let justice be administered.",
        image: "Thunder and lightning; the ancient kings made firm the laws through clearly defined penalties.",
        keywords: &["decision", "justice", "obstacle", "resolve"],
    },
    Hexagram {
        number: 22,
        name: "Grace",
        pinyin: "Bi",
        character: "賁",
        upper: Mountain,
        lower: Fire,
        judgment: "Grace has success. In small matters it is favourable to undertake something.",
        image: "Fire at the foot of the mountain; the superior person clarifies current affairs but dares not decide controversial issues this way.",
        keywords: &["beauty", "form", "adornment", "appearance"],
    },
    Hexagram {
        number: 23,
        name: "Splitting Apart",
        pinyin: "Bo",
        character: "剝",
        upper: Mountain,
        lower: Earth,
        judgment: "It does not further one to go anywhere.",
        image: "The mountain rests on the earth; those above secure their position only by giving generously to those below.",
        keywords: &["decline", "erosion", "endurance", "letting go"],
    },
    Hexagram {
        number: 24,
        name: "Return",
        pinyin: "Fu",
        character: "復",
        upper: Earth,
        lower: Thunder,
        judgment: "Success. Going out and coming in without error; friends come without blame. On the seventh day comes return.",
        image: "Thunder within the earth; the ancient kings closed the passes at the time of solstice.",
        keywords: &["return", "renewal", "turning point", "cycles"],
    },
    Hexagram {
        number: 25,
        name: "Innocence",
        pinyin: "Wu Wang",
        character: "無妄",
        upper: Heaven,
        lower: Thunder,
        judgment: "Supreme success, furthered by perseverance. If someone is not as they should be, they have misfortune.",
        image: "Under heaven thunder rolls; all things attain the natural state of innocence.",
        keywords: &["sincerity", "spontaneity", "naturalness", "the unexpected"],
    },
    Hexagram {
        number: 26,
        name: "The Taming Power of the Great",
        pinyin: "Da Chu",
        character: "大畜",
        upper: Mountain,
        lower: Heaven,
        judgment: "Perseverance furthers. Not eating at home brings good fortune. It furthers one to cross the great water.",
        image: "Heaven within the mountain; the superior person acquaints themself with the sayings and deeds of the past to strengthen character.",
        keywords: &["restraint", "accumulated strength", "study", "potential"],
    },
    Hexagram {
        number: 27,
        name: "The Corners of the Mouth",
        pinyin: "Yi",
        character: "頤",
        upper: Mountain,
        lower: Thunder,
        judgment: "Perseverance brings good fortune. Pay heed to the providing of nourishment and to what one seeks to fill one's own mouth with.",
        image: "At the foot of the mountain, thunder; the superior person is careful of their words and temperate in eating and drinking.",
        keywords: &["nourishment", "care", "moderation", "speech"],
    },
    Hexagram {
        number: 28,
        name: "Preponderance of the Great",
        pinyin: "Da Guo",
        character: "大過",
        upper: Lake,
        lower: Wind,
        judgment: "The ridgepole sags to the breaking point. It furthers one to have somewhere to go. Success.",
        image: "The lake rises above the trees; the superior person, standing alone, is unconcerned, and withdrawing from the world is undaunted.",
        keywords: &["excess", "pressure", "crisis", "courage"],
    },
    Hexagram {
        number: 29,
        name: "The Abysmal",
        pinyin: "Kan",
        character: "坎",
        upper: Water,
        lower: Water,
        judgment: "Repeated danger. If you are sincere, you have success in your heart, and whatever you do succeeds.",
        image: "Water flows on uninterruptedly and reaches its goal; the superior person walks in lasting virtue and carries on the business of teaching.",
        keywords: &["danger", "depth", "sincerity", "flow"],
    },
    Hexagram {
        number: 30,
        name: "The Clinging",
        pinyin: "Li",
        character: "離",
        upper: Fire,
        lower: Fire,
        judgment: "Perseverance furthers and brings success. Care of the cow brings good fortune.",
        image: "That which is bright rises twice; the great person illumines the four quarters of the world with a light that endures.",
        keywords: &["clarity", "illumination", "dependence", "awareness"],
    },
    Hexagram {
        number: 31,
        name: "Influence",
        pinyin: "Xian",
        character: "咸",
        upper: Lake,
        lower: Mountain,
        judgment: "Success. Perseverance furthers. To take a maiden to wife brings good fortune.",
        image: "A lake on the mountain; the superior person encourages people to approach by readiness to receive them.",
        keywords: &["attraction", "courtship", "mutual influence", "receptivity"],
    },
    Hexagram {
        number: 32,
        name: "Duration",
        pinyin: "Heng",
        character: "恆",
        upper: Thunder,
        lower: Wind,
        judgment: "Success without blame. Perseverance furthers. It furthers one to have somewhere to go.",
        image: "Thunder and wind; the superior person stands firm and does not change direction.",
        keywords: &["endurance", "commitment", "consistency", "marriage"],
    },
    Hexagram {
        number: 33,
        name: "Retreat",
        pinyin: "Dun",
        character: "遯",
        upper: Heaven,
        lower: Mountain,
        judgment: "Success. In what is small, perseverance furthers.",
        image: "Mountain under heaven; the superior person keeps the inferior at a distance, not angrily but with reserve.",
        keywords: &["withdrawal", "timing", "reserve", "self-preservation"],
    },
    Hexagram {
        number: 34,
        name: "The Power of the Great",
        pinyin: "Da Zhuang",
        character: "大壯",
        upper: Thunder,
        lower: Heaven,
        judgment: "Perseverance furthers. Great power must be joined with what is right.",
        image: "Thunder in heaven above; the superior person does not tread upon paths that do not accord with established order.",
        keywords: &["power", "vigour", "restraint", "righteousness"],
    },
    Hexagram {
        number: 35,
        name: "Progress",
        pinyin: "Jin",
        character: "晉",
        upper: Fire,
        lower: Earth,
        judgment: "The powerful prince is honoured with horses in large numbers; in a single day they are granted audience three times.",
        image: "The sun rises over the earth; the superior person brightens their own bright virtue.",
        keywords: &["advancement", "recognition", "clarity", "rising"],
    },
    Hexagram {
        number: 36,
        name: "Darkening of the Light",
        pinyin: "Ming Yi",
        character: "明夷",
        upper: Earth,
        lower: Fire,
        judgment: "In adversity it furthers one to be persevering.",
        image: "The light has sunk into the earth; the superior person veils their light and yet still shines.",
        keywords: &["adversity", "concealment", "inner light", "endurance"],
    },
    Hexagram {
        number: 37,
        name: "The Family",
        pinyin: "Jia Ren",
        character: "家人",
        upper: Wind,
        lower: Fire,
        judgment: "The perseverance of the woman furthers.",
        image: "Wind comes forth from fire; the superior person has substance in their words and duration in their way of life.",
        keywords: &["family", "roles", "loyalty", "home"],
    },
    Hexagram {
        number: 38,
        name: "Opposition",
        pinyin: "Kui",
        character: "睽",
        upper: Fire,
        lower: Lake,
        judgment: "In small matters, good fortune.",
        image: "Fire above, the lake below; amid all fellowship the superior person retains their individuality.",
        keywords: &["contrast", "estrangement", "individuality", "reconciliation"],
    },
    Hexagram {
        number: 39,
        name: "Obstruction",
        pinyin: "Jian",
        character: "蹇",
        upper: Water,
        lower: Mountain,
        judgment: "The southwest furthers, the northeast does not. It furthers one to see the great person. Perseverance brings good fortune.",
        image: "Water on the mountain; the superior person turns their attention to themself and moulds their character.",
        keywords: &["obstacle", "pause", "self-examination", "assistance"],
    },
    Hexagram {
        number: 40,
        name: "Deliverance",
        pinyin: "Xie",
        character: "解",
        upper: Thunder,
        lower: Water,
        judgment: "The southwest furthers. If there is nowhere left to go, return brings good fortune; if there is still somewhere to go, hastening brings good fortune.",
        image: "Thunder and rain set in; the superior person pardons mistakes and forgives misdeeds.",
        keywords: &["release", "relief", "forgiveness", "resolution"],
    },
    Hexagram {
        number: 41,
        name: "Decrease",
        pinyin: "Sun",
        character: "損",
        upper: Mountain,
        lower: Lake,
        judgment: "Decrease combined with sincerity brings supreme good fortune without blame. Two small bowls may be used for the sacrifice.",
        image: "At the foot of the mountain, the lake; the superior person controls their anger and restrains their instincts.",
        keywords: &["simplicity", "sacrifice", "restraint", "focus"],
    },
    Hexagram {
        number: 42,
        name: "Increase",
        pinyin: "Yi",
        character: "益",
        upper: Wind,
        lower: Thunder,
        judgment: "It furthers one to undertake something. It furthers one to cross the great water.",
        image: "Wind and thunder; when the superior person sees good, they imitate it; when they have faults, they rid themself of them.",
        keywords: &["gain", "growth", "benefit", "generosity"],
    },
    Hexagram {
        number: 43,
        name: "Break-through",
        pinyin: "Guai",
        character: "夬",
        upper: Lake,
        lower: Heaven,
        judgment: "One must resolutely make the matter known at the court of the king. It must be announced truthfully; danger remains.",
        image: "The lake has risen up to heaven; the superior person dispenses riches downward and refrains from resting on their virtue.",
        keywords: &["resolution", "breakthrough", "truthfulness", "determination"],
    },
    Hexagram {
        number: 44,
        name: "Coming to Meet",
        pinyin: "Gou",
        character: "姤",
        upper: Heaven,
        lower: Wind,
        judgment: "The maiden is powerful. One should not marry such a maiden.",
        image: "Under heaven, wind; the prince acts when disseminating commands and proclaiming them to the four quarters.",
        keywords: &["encounter", "temptation", "influence", "vigilance"],
    },
    Hexagram {
        number: 45,
        name: "Gathering Together",
        pinyin: "Cui",
        character: "萃",
        upper: Lake,
        lower: Earth,
        judgment: "Success. The king approaches the temple. It furthers one to see the great person; great offerings bring good fortune.",
        image: "Over the earth, the lake; the superior person renews their weapons to meet the unforeseen.",
        keywords: &["gathering", "community", "preparation", "shared purpose"],
    },
    Hexagram {
        number: 46,
        name: "Pushing Upward",
        pinyin: "Sheng",
        character: "升",
        upper: Earth,
        lower: Wind,
        judgment: "Pushing upward has supreme success. One must see the great person. Departure toward the south brings good fortune.",
        image: "Within the earth, wood grows; the superior person of devoted character heaps up small things to achieve something high and great.",
        keywords: &["ascent", "effort", "gradual growth", "ambition"],
    },
    Hexagram {
        number: 47,
        name: "Oppression",
        pinyin: "Kun",
        character: "困",
        upper: Lake,
        lower: Water,
        judgment: "Success. Perseverance. The great person brings about good fortune. When one has something to say, it is not believed.",
        image: "There is no water in the lake; the superior person stakes their life on following their will.",
        keywords: &["exhaustion", "adversity", "inner resolve", "silence"],
    },
    Hexagram {
        number: 48,
        name: "The Well",
        pinyin: "Jing",
        character: "井",
        upper: Water,
        lower: Wind,
        judgment: "The town may be changed, but the well cannot be changed. It neither decreases nor increases; all draw from it.",
        image: "Water over wood; the superior person encourages the people at their work and exhorts them to help one another.",
        keywords: &["source", "community", "depth", "constancy"],
    },
    Hexagram {
        number: 49,
        name: "Revolution",
        pinyin: "Ge",
        character: "革",
        upper: Lake,
        lower: Fire,
        judgment: "On your own day you are believed. Supreme success, furthering through perseverance. Remorse disappears.",
        image: "Fire in the lake; the superior person sets the calendar in order and makes the seasons clear.",
        keywords: &["change", "transformation", "timing", "renewal"],
    },
    Hexagram {
        number: 50,
        name: "The Cauldron",
        pinyin: "Ding",
        character: "鼎",
        upper: Fire,
        lower: Wind,
        judgment: "Supreme good fortune. Success.",
        image: "Fire over wood; the superior person consolidates their fate by making their position correct.",
        keywords: &["nourishment", "culture", "transformation", "offering"],
    },
    Hexagram {
        number: 51,
        name: "The Arousing",
        pinyin: "Zhen",
        character: "震",
        upper: Thunder,
        lower: Thunder,
        judgment: "Shock brings success. Shock comes; oh, oh. Laughing words; ha, ha. The shock terrifies for a hundred miles, yet the sacrificial spoon is not dropped.",
        image: "Thunder repeated; the superior person sets their life in order and examines themself in fear and trembling.",
        keywords: &["shock", "awakening", "movement", "composure"],
    },
    Hexagram {
        number: 52,
        name: "Keeping Still",
        pinyin: "Gen",
        character: "艮",
        upper: Mountain,
        lower: Mountain,
        judgment: "Keeping the back still so that one no longer feels the body. Going into the courtyard without seeing the people. No blame.",
        image: "Mountains standing close together; the superior person does not permit their thoughts to go beyond their situation.",
        keywords: &["stillness", "meditation", "boundaries", "rest"],
    },
    Hexagram {
        number: 53,
        name: "Development",
        pinyin: "Jian",
        character: "漸",
        upper: Wind,
        lower: Mountain,
        judgment: "The maiden is given in marriage. Good fortune. Perseverance furthers.",
        image: "On the mountain, a tree; the superior person abides in dignity and virtue to improve the mores.",
        keywords: &["gradual progress", "patience", "steady growth", "commitment"],
    },
    Hexagram {
        number: 54,
        name: "The Marrying Maiden",
        pinyin: "Gui Mei",
        character: "歸妹",
        upper: Thunder,
        lower: Lake,
        judgment: "Undertakings bring misfortune. Nothing that would further.",
        image: "Thunder over the lake; the superior person understands the transitory in the light of the eternity of the end.",
        keywords: &["subordination", "impulse", "proper place", "transience"],
    },
    Hexagram {
        number: 55,
        name: "Abundance",
        pinyin: "Feng",
        character: "豐",
        upper: Thunder,
        lower: Fire,
        judgment: "Abundance has success. The king attains it. Be not sad; be like the sun at midday.",
        image: "Thunder and lightning come together; the superior person decides lawsuits and carries out punishments.",
        keywords: &["fullness", "peak", "abundance", "impermanence"],
    },
    Hexagram {
        number: 56,
        name: "The Wanderer",
        pinyin: "Lu",
        character: "旅",
        upper: Fire,
        lower: Mountain,
        judgment: "Success through smallness. Perseverance brings good fortune to the wanderer.",
        image: "Fire on the mountain; the superior person is clear-minded and cautious in imposing penalties and does not protract disputes.",
        keywords: &["travel", "transience", "caution", "solitude"],
    },
    Hexagram {
        number: 57,
        name: "The Gentle",
        pinyin: "Xun",
        character: "巽",
        upper: Wind,
        lower: Wind,
        judgment: "Success through what is small. It furthers one to have somewhere to go and to see the great person.",
        image: "Winds following one upon the other; the superior person spreads their commands abroad and carries out their undertakings.",
        keywords: &["penetration", "gentleness", "persistence", "influence"],
    },
    Hexagram {
        number: 58,
        name: "The Joyous",
        pinyin: "Dui",
        character: "兌",
        upper: Lake,
        lower: Lake,
        judgment: "Success. Perseverance is favourable.",
        image: "Lakes resting one on the other; the superior person joins with friends for discussion and practice.",
        keywords: &["joy", "exchange", "friendship", "openness"],
    },
    Hexagram {
        number: 59,
        name: "Dispersion",
        pinyin: "Huan",
        character: "渙",
        upper: Wind,
        lower: Water,
        judgment: "Success. The king approaches his temple. It furthers one to cross the great water. Perseverance furthers.",
        image: "The wind drives over the water; the ancient kings sacrificed to the Lord and built temples.",
        keywords: &["dissolution", "release", "unity", "spirituality"],
    },
    Hexagram {
        number: 60,
        name: "Limitation",
        pinyin: "Jie",
        character: "節",
        upper: Water,
        lower: Lake,
        judgment: "Success. Galling limitation must not be persevered in.",
        image: "Water over the lake; the superior person creates number and measure and examines the nature of virtue and correct conduct.",
        keywords: &["limits", "measure", "discipline", "moderation"],
    },
    Hexagram {
        number: 61,
        name: "Inner Truth",
        pinyin: "Zhong Fu",
        character: "中孚",
        upper: Wind,
        lower: Lake,
        judgment: "Pigs and fishes. Good fortune. It furthers one to cross the great water. Perseverance furthers.",
        image: "Wind over the lake; the superior person discusses criminal cases in order to delay executions.",
        keywords: &["sincerity", "trust", "empathy", "inner truth"],
    },
    Hexagram {
        number: 62,
        name: "Preponderance of the Small",
        pinyin: "Xiao Guo",
        character: "小過",
        upper: Thunder,
        lower: Mountain,
        judgment: "Success. Perseverance furthers. Small things may be done; great things should not be done. It is not well to strive upward.",
        image: "Thunder on the mountain; in conduct the superior person gives preponderance to reverence, in mourning to grief, in expenditure to thrift.",
        keywords: &["detail", "humility", "caution", "small steps"],
    },
    Hexagram {
        number: 63,
        name: "After Completion",
        pinyin: "Ji Ji",
        character: "既濟",
        upper: Water,
        lower: Fire,
        judgment: "Success in small matters. Perseverance furthers. At the beginning good fortune, at the end disorder.",
        image: "Water over fire; the superior person takes thought of misfortune and arms themself against it in advance.",
        keywords: &["completion", "order", "vigilance", "transition"],
    },
    Hexagram {
        number: 64,
        name: "Before Completion",
        pinyin: "Wei Ji",
        character: "未濟",
        upper: Fire,
        lower: Water,
        judgment: "Success. But if the little fox, after nearly completing the crossing, gets its tail in the water, there is nothing that would further.",
        image: "Fire over water; the superior person is careful in the differentiation of things so that each finds its place.",
        keywords: &["potential", "transition", "care", "unfinished"],
    },
];
