//! The canned-reply table — ordered keyword rules, first match wins.
//!
//! Matching is deliberately dumb: lowercase the utterance, walk the table in
//! priority order, and fire on the first rule whose keyword set has a
//! substring hit. Unmatched input falls through to a fixed fallback reply,
//! so the assistant never appears to break.

/// One entry in the dispatch table. The table is immutable for the process
/// lifetime — rules are never added, removed, or reordered at runtime.
pub struct ResponseRule {
    pub topic: &'static str,
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

/// Priority-ordered dispatch table. Keywords are lowercase; matching is
/// substring containment, not whole-word.
pub const RULES: &[ResponseRule] = &[
    ResponseRule {
        topic: "projects",
        keywords: &["proyek", "project"],
        reply: "Saya telah mengerjakan beberapa proyek menarik seperti Smart Home berbasis Arduino Uno yang dapat memonitor suhu dan mengontrol lampu dari jarak jauh, serta instalasi jaringan ISP dengan tingkat uptime 99.8%. Proyek mana yang ingin Anda ketahui lebih detail?",
    },
    ResponseRule {
        topic: "arduino",
        keywords: &["arduino", "iot"],
        reply: "Proyek Arduino saya adalah sistem Smart Home yang menggunakan Arduino Uno, sensor DHT22, dan ESP8266 untuk konektivitas WiFi. Sistem ini dapat memonitor suhu real-time dan mengontrol lampu melalui smartphone dengan response time kurang dari 2 detik. Sangat efisien untuk menghemat energi hingga 30%!",
    },
    ResponseRule {
        topic: "experience",
        keywords: &["pengalaman", "kerja", "experience"],
        reply: "Saya memiliki pengalaman sebagai Operator Produksi di PT Serin Indonesia dan Data Entry di PT Wova Group Indonesia. Saya juga aktif dalam instalasi jaringan ISP. Pengalaman ini mengajarkan saya tentang ketelitian, disiplin, dan kerja tim yang solid.",
    },
    ResponseRule {
        topic: "skills",
        keywords: &["skill", "keahlian"],
        reply: "Keahlian saya meliputi: Arduino & IoT, Data Entry dengan akurasi 99.5%, Instalasi Jaringan, Microsoft Office, dan Production. Saya juga memiliki soft skills seperti komunikasi yang baik, kerja tim, dan problem solving yang sistematis.",
    },
    ResponseRule {
        topic: "contact",
        keywords: &["kontak", "contact"],
        reply: "Anda bisa menghubungi saya melalui email di shawavatritya@gmail.com atau WhatsApp di 085187805786. Saya juga aktif di LinkedIn dan GitHub. Jangan ragu untuk berkolaborasi!",
    },
    ResponseRule {
        topic: "education",
        keywords: &["sekolah", "pendidikan"],
        reply: "Saya adalah pelajar aktif di SMK Negeri 1 Cileungsi jurusan Teknik Komputer dan Jaringan (2023-2026). Di sini saya mempelajari instalasi jaringan, pemrograman mikrokontroler, dan sistem komputer secara mendalam.",
    },
];

/// Reply used when no rule matches.
pub const FALLBACK_REPLY: &str = "Terima kasih atas pertanyaannya! Saya siap membantu Anda mengetahui lebih lanjut tentang proyek, pengalaman, atau keahlian saya. Bisa Anda spesifikkan apa yang ingin Anda ketahui? Misalnya tentang proyek Arduino, pengalaman kerja, atau skill teknis saya.";

/// Find the first rule triggered by the utterance, in priority order.
pub fn match_rule(utterance: &str) -> Option<&'static ResponseRule> {
    let normalized = utterance.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| normalized.contains(kw)))
}

/// Total reply selection: first matching rule's reply, or the fallback.
pub fn reply_for(utterance: &str) -> &'static str {
    match_rule(utterance).map(|rule| rule.reply).unwrap_or(FALLBACK_REPLY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_is_deterministic() {
        let first = reply_for("ceritakan pengalaman kerja Anda");
        let second = reply_for("ceritakan pengalaman kerja Anda");
        assert_eq!(first, second);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(reply_for("PROYEK apa saja?"), RULES[0].reply);
        assert_eq!(reply_for("Tentang Arduino"), RULES[1].reply);
    }

    #[test]
    fn test_lower_priority_topic_wins_on_tie() {
        // Contains "project" (priority 1) and "arduino" (priority 2) —
        // first match wins regardless of keyword position or frequency.
        let utterance = "tanya soal project arduino saya";
        assert_eq!(match_rule(utterance).map(|r| r.topic), Some("projects"));

        let reversed = "arduino arduino untuk project";
        assert_eq!(match_rule(reversed).map(|r| r.topic), Some("projects"));
    }

    #[test]
    fn test_substring_containment_is_sufficient() {
        // "iot" buried inside "iotnya" still triggers the arduino rule.
        assert_eq!(match_rule("saya suka iotnya").map(|r| r.topic), Some("arduino"));
    }

    #[test]
    fn test_unmatched_input_falls_back() {
        assert_eq!(reply_for("xyz123"), FALLBACK_REPLY);
        assert_eq!(reply_for(""), FALLBACK_REPLY);
    }

    #[test]
    fn test_every_topic_is_reachable() {
        let probes = [
            ("proyek", "projects"),
            ("iot", "arduino"),
            ("experience", "experience"),
            ("keahlian", "skills"),
            ("contact", "contact"),
            ("pendidikan", "education"),
        ];
        for (probe, topic) in probes {
            assert_eq!(match_rule(probe).map(|r| r.topic), Some(topic));
        }
    }
}
