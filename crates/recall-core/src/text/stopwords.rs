//! Stopword sets.
//!
//! `ENGLISH` and `CHINESE` filter keyword extraction. `GENERAL` is the much
//! broader list that keeps generic vocabulary out of discovered keywords.

use std::collections::HashSet;
use std::sync::OnceLock;

static ENGLISH: OnceLock<HashSet<&'static str>> = OnceLock::new();
static CHINESE: OnceLock<HashSet<&'static str>> = OnceLock::new();
static GENERAL: OnceLock<HashSet<&'static str>> = OnceLock::new();

const ENGLISH_WORDS: &[&str] = &[
    // Articles, prepositions, conjunctions
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "being", "to", "for", "of",
    "in", "on", "at", "by", "with", "from", "as", "and", "or", "but", "if", "then", "else",
    "when", "where", "why", "how", "what", "which", "who", "whom", "whose",
    // Pronouns
    "i", "me", "my", "mine", "we", "us", "our", "ours", "you", "your", "yours", "he", "him",
    "his", "she", "her", "hers", "it", "its", "they", "them", "their", "theirs", "this",
    "that", "these", "those",
    // Generic verbs
    "do", "does", "did", "done", "doing", "have", "has", "had", "having", "get", "got",
    "getting", "gets", "make", "made", "making", "makes", "go", "went", "going", "goes",
    "gone", "take", "took", "taking", "takes", "taken", "come", "came", "coming", "comes",
    "see", "saw", "seeing", "sees", "seen", "know", "knew", "knowing", "knows", "known",
    "think", "thought", "thinking", "thinks", "want", "wanted", "wanting", "wants", "need",
    "needed", "needing", "needs", "try", "tried", "trying", "tries", "use", "used", "using",
    "uses", "find", "found", "finding", "finds", "give", "gave", "giving", "gives", "given",
    "tell", "told", "telling", "tells", "say", "said", "saying", "says", "let", "lets",
    "letting", "put", "puts", "putting", "keep", "kept", "keeping", "keeps", "begin", "began",
    "beginning", "begins", "begun", "seem", "seemed", "seeming", "seems", "leave", "left",
    "leaving", "leaves", "call", "called", "calling", "calls", "ask", "asked", "asking",
    "asks", "work", "worked", "working", "works", "look", "looked", "looking", "looks",
    // Command verbs
    "fix", "fixed", "fixing", "fixes", "add", "added", "adding", "adds", "show", "showed",
    "showing", "shows", "shown", "check", "checked", "checking", "checks", "debug",
    "debugged", "debugging", "debugs", "run", "ran", "running", "runs", "start", "started",
    "starting", "starts", "stop", "stopped", "stopping", "stops", "open", "opened",
    "opening", "opens", "close", "closed", "closing", "closes", "read", "reading", "reads",
    "write", "wrote", "writing", "writes", "written", "create", "created", "creating",
    "creates", "delete", "deleted", "deleting", "deletes", "update", "updated", "updating",
    "updates", "change", "changed", "changing", "changes", "set", "setting", "sets", "move",
    "moved", "moving", "moves", "copy", "copied", "copying", "copies", "send", "sent",
    "sending", "sends", "remember", "remembered", "remembering", "remembers", "continue",
    "continued", "continuing", "continues",
    // Modals
    "can", "could", "will", "would", "shall", "should", "may", "might", "must",
    // Adverbs
    "just", "also", "only", "still", "even", "again", "now", "here", "there", "very",
    "really", "well", "back", "much", "more", "most", "less", "least", "off", "out", "up",
    "down", "away",
    // Fillers
    "please", "thanks", "thank", "help", "okay", "ok", "yes", "no", "maybe", "perhaps",
    "actually", "basically", "probably",
    // Other common words
    "about", "after", "before", "between", "through", "during", "into", "over", "under",
    "above", "below", "some", "any", "all", "each", "every", "both", "few", "many", "other",
    "another", "such", "same", "different", "first", "last", "next", "new", "old", "good",
    "bad", "right", "wrong", "way", "thing", "things", "something", "anything", "nothing",
    "everything",
    // Short fragments
    "am", "re", "oh", "so", "hi", "ah",
];

const CHINESE_WORDS: &[&str] = &[
    // Particles
    "的", "地", "得", "了", "着", "过", "吗", "呢", "啊", "吧", "呀", "哦", "嘛", "啦",
    // Pronouns
    "我", "你", "您", "他", "她", "它", "我们", "你们", "他们", "她们", "它们", "这", "那",
    "这个", "那个", "这些", "那些", "这里", "那里",
    // Conjunctions, prepositions
    "和", "与", "或", "但", "但是", "因为", "所以", "如果", "虽然", "在", "从", "到", "对",
    "向", "把", "被", "给", "跟", "比",
    // Location words
    "里", "里面", "外", "外面", "上", "上面", "下", "下面", "前", "前面", "后", "后面",
    // Generic verbs
    "是", "有", "没有", "没", "不", "不是", "会", "能", "可以", "要", "想", "应该", "做", "去",
    "来", "说", "看", "知道", "觉得", "认为", "希望", "看看", "想要", "有个", "是不是",
    "能不能", "可不可以", "不能", "帮", "帮我", "帮忙", "请", "请问", "试试", "想想", "看下",
    "看一下", "弄", "搞", "整", "无法", "不对", "不行", "不好", "好像", "可能", "执行",
    "添加", "讨论", "使用",
    // Time references
    "之前", "之后", "以前", "以后", "上次", "下次", "刚才", "现在", "马上", "今天", "明天",
    "昨天", "时候",
    // Question words
    "什么", "怎么", "怎样", "为什么", "哪", "哪个", "哪些", "哪里", "谁", "多少",
    // Adverbs
    "很", "太", "真", "最", "更", "非常", "特别", "比较", "稍微", "就", "才", "都", "也", "还",
    "又", "再", "已经", "正在", "一直", "还是", "先", "不管", "不要",
    // Measure words and numbers
    "个", "些", "点", "次", "种", "样", "一", "一个", "一下", "一些", "一点",
    // Fillers
    "好", "行", "好的", "然后", "接下来",
];

const GENERAL_WORDS: &[&str] = &[
    // Common English
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "being", "to", "for", "of",
    "in", "on", "at", "by", "with", "from", "as", "and", "or", "but", "if", "then", "else",
    "this", "that", "it", "you", "we", "they", "have", "has", "had", "do", "does", "did",
    "will", "would", "can", "could", "should", "may", "might", "must", "not", "no", "yes",
    "just", "also", "only", "more", "some", "any", "all", "each", "every", "both", "few",
    "many", "much", "most", "other", "such", "same", "new", "first", "last", "next", "right",
    "now", "here", "there", "when", "where", "why", "how", "what", "which", "who", "whom",
    "whose", "one", "two", "three", "your", "our", "their", "its", "into", "about", "after",
    "before",
    // Generic tech vocabulary
    "use", "used", "using", "uses", "file", "files", "code", "like", "need", "get", "got",
    "make", "made", "set", "see", "look", "find", "run", "running", "test", "error",
    "message", "result", "value", "data", "name", "type", "text", "line", "time", "user",
    "path", "search", "bash", "memory", "session", "sessions", "tool", "tools", "work",
    "works", "working", "let", "key", "summary", "full", "messages", "current", "results",
    "output", "without", "start", "open", "format", "based", "via", "command", "setup",
    "mode", "add", "system", "access", "call", "calls", "check", "show", "process", "com",
    "www", "http", "https", "function", "method", "class", "object", "string", "number",
    "list", "input", "response", "request", "query", "params", "args", "options", "config",
    "default", "true", "false", "null", "none", "return", "load", "save", "parse", "build",
    "generate", "extract", "convert", "handle", "execute", "implement", "import", "export",
    "module", "version", "example", "testing", "debug", "log", "print", "display",
    // Escaped-newline artifacts from transcripts
    "nmemory", "nthe", "nif", "nsearch", "nthis", "nthat",
    // Conversation words
    "help", "please", "thanks", "want", "trying", "going", "doing", "think", "know",
    "question", "questions", "answer", "problem", "issue", "solution", "idea", "way",
    "thing", "something", "anything", "everything",
    // Generic adjectives
    "simple", "better", "good", "best", "great", "nice", "fine", "easy", "hard",
    "difficult", "fast", "slow", "quick", "small", "large", "big", "old", "long", "short",
    "high", "low", "empty", "available", "optional", "required", "relevant", "useful",
    "different", "similar",
    // Generic past participles
    "added", "updated", "changed", "created", "removed", "deleted", "moved", "done", "found",
    "written", "read", "called", "defined",
    // Generic nouns
    "words", "terms", "names", "types", "items", "elements", "parts", "design", "structure",
    "pattern", "patterns", "style", "styles", "docs", "documentation", "readme", "guide",
    "tutorial", "reference",
    // Misc
    "etc", "through", "out", "top", "wants", "native", "complex", "natural", "language",
    "matches", "primary", "multi", "control", "recommendation", "date", "filter", "auto",
    "pass", "flag", "dev", "commands",
    // Assistant-transcript vocabulary
    "claude", "agent", "agents", "task", "tasks", "context", "prompt", "hint", "hints",
    "keyword", "keywords", "topics", "topic", "extraction", "architecture",
    "implementation", "workflow", "approach",
    // Common Chinese
    "的", "地", "得", "了", "着", "过", "吗", "呢", "啊", "吧", "呀", "我", "你", "他", "她",
    "它", "我们", "你们", "他们", "这", "那", "是", "有", "没有", "不", "会", "能", "可以",
    "要", "想", "做", "看", "说", "知道", "帮", "帮我", "请", "什么", "怎么", "为什么", "很",
    "太", "最", "更", "就", "才", "都", "也", "还", "又", "再", "个", "些", "点", "下", "次",
    "好", "行", "然后",
];

fn set(words: &'static [&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

/// English keyword-extraction stopword (expects lowercase input)
pub fn is_english_stopword(word: &str) -> bool {
    ENGLISH.get_or_init(|| set(ENGLISH_WORDS)).contains(word)
}

/// Chinese keyword-extraction stopword
pub fn is_chinese_stopword(word: &str) -> bool {
    CHINESE.get_or_init(|| set(CHINESE_WORDS)).contains(word)
}

/// Generic vocabulary excluded from keyword discovery (case-insensitive for ASCII)
pub fn is_general_stopword(word: &str) -> bool {
    let general = GENERAL.get_or_init(|| set(GENERAL_WORDS));
    general.contains(word) || general.contains(word.to_lowercase().as_str())
}
