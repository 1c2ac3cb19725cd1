use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::IpsumError;

/// Grammatical role of a phrase list.
///
/// The wire name (`as_str`) is the camelCase key used by the HTTP API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WordCategory {
	Subjects,
	Verbs,
	FutureVerbs,
	NegativeVerbs,
	Objects,
	Adjectives,
	Locations,
	TimeExpressions,
	CurseWords,
	CurseAdjectives,
	Exclamations,
	QuestionWords,
	Connectors,
	Intensifiers,
	Reactions,
	Slang,
	Reasons,
	Memes,
}

impl WordCategory {
	/// Number of categories.
	pub const COUNT: usize = 18;

	/// Every category, in declaration order.
	pub const ALL: [WordCategory; WordCategory::COUNT] = [
		WordCategory::Subjects,
		WordCategory::Verbs,
		WordCategory::FutureVerbs,
		WordCategory::NegativeVerbs,
		WordCategory::Objects,
		WordCategory::Adjectives,
		WordCategory::Locations,
		WordCategory::TimeExpressions,
		WordCategory::CurseWords,
		WordCategory::CurseAdjectives,
		WordCategory::Exclamations,
		WordCategory::QuestionWords,
		WordCategory::Connectors,
		WordCategory::Intensifiers,
		WordCategory::Reactions,
		WordCategory::Slang,
		WordCategory::Reasons,
		WordCategory::Memes,
	];

	/// Returns the camelCase name of the category.
	pub fn as_str(self) -> &'static str {
		match self {
			WordCategory::Subjects => "subjects",
			WordCategory::Verbs => "verbs",
			WordCategory::FutureVerbs => "futureVerbs",
			WordCategory::NegativeVerbs => "negativeVerbs",
			WordCategory::Objects => "objects",
			WordCategory::Adjectives => "adjectives",
			WordCategory::Locations => "locations",
			WordCategory::TimeExpressions => "timeExpressions",
			WordCategory::CurseWords => "curseWords",
			WordCategory::CurseAdjectives => "curseAdjectives",
			WordCategory::Exclamations => "exclamations",
			WordCategory::QuestionWords => "questionWords",
			WordCategory::Connectors => "connectors",
			WordCategory::Intensifiers => "intensifiers",
			WordCategory::Reactions => "reactions",
			WordCategory::Slang => "slang",
			WordCategory::Reasons => "reasons",
			WordCategory::Memes => "memes",
		}
	}

	fn index(self) -> usize {
		self as usize
	}
}

impl fmt::Display for WordCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for WordCategory {
	type Err = IpsumError;

	/// Parses a camelCase category name (case-sensitive).
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		WordCategory::ALL
			.into_iter()
			.find(|category| category.as_str() == s)
			.ok_or_else(|| IpsumError::NotFound(s.to_owned()))
	}
}

/// Read-only phrase lists indexed by `WordCategory`.
///
/// The process-wide Bisaya bank is available through `WordBank::bisaya()`.
/// Custom banks can be built with `WordBank::new`, mostly for tests.
///
/// ## Invariants
/// - Every list is expected to be non-empty; `validate` checks it.
#[derive(Debug, Clone, Copy)]
pub struct WordBank<'a> {
	lists: [&'a [&'a str]; WordCategory::COUNT],
}

static BISAYA: WordBank<'static> = WordBank {
	lists: [
		SUBJECTS,
		VERBS,
		FUTURE_VERBS,
		NEGATIVE_VERBS,
		OBJECTS,
		ADJECTIVES,
		LOCATIONS,
		TIME_EXPRESSIONS,
		CURSE_WORDS,
		CURSE_ADJECTIVES,
		EXCLAMATIONS,
		QUESTION_WORDS,
		CONNECTORS,
		INTENSIFIERS,
		REACTIONS,
		SLANG,
		REASONS,
		MEMES,
	],
};

impl WordBank<'static> {
	/// Returns the built-in Cebuano/Bisaya word bank.
	pub fn bisaya() -> &'static WordBank<'static> {
		&BISAYA
	}
}

impl<'a> WordBank<'a> {
	/// Builds a bank from one list per category, in `WordCategory::ALL` order.
	pub fn new(lists: [&'a [&'a str]; WordCategory::COUNT]) -> Self {
		Self { lists }
	}

	/// Returns the phrases of a category.
	pub fn get(&self, category: WordCategory) -> &'a [&'a str] {
		self.lists[category.index()]
	}

	/// Looks up a category by its camelCase name.
	///
	/// # Errors
	/// Returns `IpsumError::NotFound` if the name is not a known category.
	pub fn lookup(&self, name: &str) -> Result<(WordCategory, &'a [&'a str]), IpsumError> {
		let category: WordCategory = name.parse()?;
		Ok((category, self.get(category)))
	}

	/// Iterates over `(category, phrases)` pairs in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (WordCategory, &'a [&'a str])> + '_ {
		WordCategory::ALL.into_iter().map(|category| (category, self.get(category)))
	}

	/// Total number of phrases over every category.
	pub fn total(&self) -> usize {
		self.lists.iter().map(|list| list.len()).sum()
	}

	/// Checks that no category is empty.
	///
	/// Meant to run once at startup: a template referencing an empty
	/// category could not produce anything.
	///
	/// # Errors
	/// Returns `IpsumError::EmptyCategory` for the first empty category.
	pub fn validate(&self) -> Result<(), IpsumError> {
		match self.iter().find(|(_, phrases)| phrases.is_empty()) {
			Some((category, _)) => Err(IpsumError::EmptyCategory(category)),
			None => Ok(()),
		}
	}
}

impl Serialize for WordBank<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(WordCategory::COUNT))?;
		for (category, phrases) in self.iter() {
			map.serialize_entry(category.as_str(), phrases)?;
		}
		map.end()
	}
}

// People and things
pub const SUBJECTS: &[&str] = &[
	"ang tawo", "ang bata", "ang lalaki", "ang babaye", "ang tiguwang",
	"ang silingan", "ang higala", "ang tropa", "ang boss", "ang manong",
	"ang manang", "ang lola", "ang lolo", "ang tatay", "ang nanay",
	"ang iro", "ang iring", "ang manok", "ang baboy", "ang kanding",
	"ang driver", "ang tindero", "ang estudyante", "ang maestra", "ang pari",
	"ang kapitan", "ang pulis", "ang doktor", "ang tambay", "ang hubog",
	"si kuya", "si ate", "si dodong", "si inday", "si pare", "si mare",
	"ang akong amigo", "ang imong igsuon", "ang ilang anak", "ning yawaa",
];

// Past/present tense
pub const VERBS: &[&str] = &[
	"nagkaon", "natulog", "naglakaw", "nagdagan", "nagtrabaho", "nag-eskwela",
	"nagbayle", "nagkanta", "nagsugal", "nag-inom", "naghugas", "nagluto",
	"nagbasa", "nagsulat", "nagtan-aw", "naminaw", "nagsulti", "nagsinggit",
	"nagdula", "naghilak", "nagkatawa", "nagpuyo", "nagsakay", "nagmaneho",
	"nagpalit", "nagbaligya", "nagpangita", "nagkuha", "nagtago", "nagdala",
	"naghatag", "nagpahulam", "nagpautang", "nagbayad", "nagkawat", "nagsige",
];

pub const FUTURE_VERBS: &[&str] = &[
	"mokaon", "matulog", "molakaw", "modagan", "motrabaho", "mo-eskwela",
	"mobayle", "mokanta", "mosugal", "mo-inom", "moluto", "mobasa",
	"mosulat", "motan-aw", "maminaw", "mosulti", "modula", "mosakay",
	"mopalit", "mobaligya", "mopangita", "mokuha", "motago", "modala",
	"mohatag", "mobayad", "mouli", "moadto", "moanhi", "molarga",
];

pub const NEGATIVE_VERBS: &[&str] = &[
	"wala magkaon", "wala matulog", "wala molakaw", "wala motrabaho",
	"dili mokaon", "dili matulog", "dili molakaw", "dili mosulti",
	"dili ganahan", "dili gusto", "dili kabalo", "dili makahimo",
	"ayaw pagsaba", "ayaw paghilak", "ayaw pagsinggit", "ayaw pagbuang",
];

// Stored with the "og" object marker
pub const OBJECTS: &[&str] = &[
	"og pagkaon", "og tubig", "og kan-on", "og sud-an", "og isda", "og karne",
	"og manok", "og prutas", "og saging", "og mangga", "og mais",
	"og kwarta", "og plata", "og cellphone", "og motor", "og sakyanan",
	"og balay", "og yuta", "og trabaho", "og problema", "og utang",
	"og beer", "og tuba", "og bino", "og ilimnon", "og sigarilyo",
	"og libro", "og papel", "og computer", "og TV", "og radyo",
];

pub const ADJECTIVES: &[&str] = &[
	"gwapa", "gwapo", "pangit", "nindot", "lami", "tam-is", "pait",
	"init", "bugnaw", "dako", "gamay", "taas", "mubo", "tambok", "niwang",
	"paspas", "hinay", "kusog", "huyang", "baho", "humot", "hugaw", "limpyo",
	"barato", "mahal", "daan", "bag-o", "maayo", "dautan", "buotan", "maldito",
	"saba", "hilom", "busy", "libre", "kapoy", "lingaw", "lungon", "hayahay",
];

pub const LOCATIONS: &[&str] = &[
	"sa balay", "sa eskwelahan", "sa merkado", "sa tindahan", "sa simbahan",
	"sa kalsada", "sa kanto", "sa plaza", "sa mall", "sa opisina",
	"sa dagat", "sa bukid", "sa suba", "sa lasang", "sa uma",
	"sa kusina", "sa sala", "sa kwarto", "sa banyo", "sa balkon",
	"sa Cebu", "sa Manila", "sa probinsya", "sa syudad", "sa abroad",
	"diri", "didto", "dinhi", "adto", "sa sulod", "sa gawas",
];

pub const TIME_EXPRESSIONS: &[&str] = &[
	"karon", "ganina", "gahapon", "kagahapon", "ugma", "sunod adlaw",
	"karong buntag", "karong hapon", "karong gabii", "kaganina sa buntag",
	"kaniadto", "sa una", "bag-o lang", "dugay na", "kanunay", "pirmi",
	"usahay", "matag adlaw", "matag gabii", "kada semana", "kada bulan",
	"sa dili pa", "pagkahuman", "samtang", "kung", "inig",
];

pub const CURSE_WORDS: &[&str] = &[
	"yawa", "buang", "bogo", "piste", "giatay", "atay", "linti", "lintion",
	"animal", "hayop", "hinayupak", "hangag", "siraulo", "tabil",
	"yawaa", "buanga", "pisteng yawa", "giatay ning", "lintia",
	"way pulos", "pakyas", "bastos", "hugaw", "bwakanang", "kupal",
	"unggoy", "baboy", "iro", "kabaw", "kanding", "peste",
];

pub const CURSE_ADJECTIVES: &[&str] = &[
	"yawaa", "buanga", "bogoa", "pistea", "giataya", "way pulos",
	"walay batasan", "walay ulaw", "walay buot", "tanga", "bobo",
	"hungog", "libog", "loko", "daotan", "hugaw", "bastos",
];

pub const EXCLAMATIONS: &[&str] = &[
	"ay sus", "sus ginoo", "pastilan", "uy", "oy", "hala", "bitaw",
	"mao gyud", "tinuod", "grabe", "kaluoy", "kaluoy sa dios",
	"ambot", "wa koy paki", "bahala na", "sige lang", "maayo ra",
	"sakto", "amen", "salamat", "unsa man", "mao ba", "ah mao diay",
];

pub const QUESTION_WORDS: &[&str] = &[
	"ngano", "unsa", "kinsa", "asa", "kanus-a", "pila", "giunsa",
	"unsay", "kinsay", "asay", "pilay", "nganong", "unsaon",
];

pub const CONNECTORS: &[&str] = &[
	"kay", "pero", "ug", "og", "tungod", "bisan", "kung", "para",
	"samtang", "pagkahuman", "apan", "gani", "hinuon", "mao nga",
];

pub const INTENSIFIERS: &[&str] = &[
	"kaayo", "gyud", "jud", "ra", "lang", "man", "ba", "pud", "usab",
	"na", "pa", "bitaw", "lagi", "gani", "diay", "kuno", "daw",
];

pub const REACTIONS: &[&str] = &[
	"mao na", "sige", "okay ra", "way blema", "cge", "oo", "dili",
	"basin", "tingali", "siguro", "unya", "ambot lang", "bahala ka",
	"ikaw bahala", "wa koy labot", "di ko sure", "tan-awa lang",
];

// Slang and terms of address
pub const SLANG: &[&str] = &[
	"chada", "tsada", "chuy", "kuyaw", "walay sapayan", "chill lang",
	"solid", "legit", "lods", "sis", "bro", "pre", "bay", "dong", "day",
	"beshie", "mare", "pare", "tol", "bai", "tsong",
];

// "kay" + reason
pub const REASONS: &[&str] = &[
	"kay gutom", "kay kapoy", "kay busy", "kay way kwarta", "kay hubog",
	"kay buang", "kay way oras", "kay natulog", "kay nakalimot",
	"kay way gana", "kay masakit", "kay ulan", "kay init", "kay bugnaw",
	"kay way signal", "kay naay problema", "kay grabe ang traffic",
];

pub const MEMES: &[&str] = &[
	"ang court, ang court of appeal, dunk it",
	"pakyu, english english",
	"wa koy paki sa imong opinyon",
	"unsa may problema nimo, dako kaayo imong problema",
	"excuse me, excuse me lang",
	"way labot ka, way labot",
	"mamatay na lang ko kaysa",
	"hala sige, padayon lang",
	"asa man ang yakult",
	"naa kay problema sa akoa",
	"mao na gyud na siya, wa nay lain",
	"puhon, puhon ra gyud",
	"basin ug naay miracle",
	"cge sige, ikaw ra gyud",
	"dili nako dawaton, balik dayon",
	"daghan kaayo ug rason",
	"wa gyud ka magbag-o",
	"hala ka, nabuang na gyud",
	"grabe ka dong, grabe gyud",
	"iyot ug saging kaw",
	"banana man",
	"kaon palang kag tae",
	"boang bayota",
	"triple B",
	"bayot boang bogo",
	"stupid bitch ass pinoy",
	"bisaya bobo boang",
	"kol ayaw kol bata pako kol",
	"aysig pangawat ug manok",
	"mangawat tag manok na",
	"hooooy ang baboy iya gi iyot",
	"hala kaluoy sa bata, hala ang kabaw, hala ang baka, hala ang kabaw",
	"mukaon ug pagpag",
	"jollikod",
	"kung gabasa ka ani, yawa ka haha",
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_category_has_phrases() {
		let bank = WordBank::bisaya();
		for (category, phrases) in bank.iter() {
			assert!(!phrases.is_empty(), "{category} is empty");
		}
		assert!(bank.validate().is_ok());
	}

	#[test]
	fn category_names_round_trip() {
		for category in WordCategory::ALL {
			assert_eq!(category.as_str().parse::<WordCategory>().unwrap(), category);
		}
	}

	#[test]
	fn unknown_category_is_not_found() {
		let err = WordBank::bisaya().lookup("bogusCategory").unwrap_err();
		assert!(matches!(err, IpsumError::NotFound(name) if name == "bogusCategory"));
	}

	#[test]
	fn lookup_is_case_sensitive() {
		assert!(WordBank::bisaya().lookup("curseWords").is_ok());
		assert!(WordBank::bisaya().lookup("cursewords").is_err());
	}

	#[test]
	fn total_counts_every_phrase() {
		let bank = WordBank::bisaya();
		let expected: usize = bank.iter().map(|(_, phrases)| phrases.len()).sum();
		assert_eq!(bank.total(), expected);
		assert_eq!(bank.get(WordCategory::Memes).len(), 35);
	}

	#[test]
	fn empty_category_fails_validation() {
		const FILLER: &[&str] = &["x"];
		let mut lists = [FILLER; WordCategory::COUNT];
		lists[WordCategory::Slang as usize] = &[];
		let bank = WordBank::new(lists);
		assert!(matches!(bank.validate(), Err(IpsumError::EmptyCategory(WordCategory::Slang))));
	}

	#[test]
	fn serializes_in_category_order() {
		let json = serde_json::to_value(WordBank::bisaya()).unwrap();
		let map = json.as_object().unwrap();
		assert_eq!(map.len(), WordCategory::COUNT);
		assert_eq!(map["questionWords"].as_array().unwrap().len(), 13);
	}
}
