//! Plain-text rendering of engine output.

use mingli_rs::{
    DailyFortune, DestinyReport, DomainScore, FortuneScore, FourPillarsChart, PurpleStarChart,
    SexagenaryDate, SolarDateTime, StrengthAnalysis,
};

pub fn sexagenary(s: &SexagenaryDate) {
    println!("公历: {}", s.solar);
    println!("农历: {}", s.lunar);
    println!(
        "四柱: {} {} {} {}  生肖: {}",
        s.year,
        s.month,
        s.day,
        s.hour,
        s.zodiac()
    );
}

pub fn solar(dt: &SolarDateTime) {
    println!("{dt}");
}

pub fn bazi(chart: &FourPillarsChart, strength: &StrengthAnalysis) {
    println!("      天干 地支 十神 藏干");
    for (label, p) in ["年柱", "月柱", "日柱", "时柱"].iter().zip(chart.pillars()) {
        let god = p.ten_god.map_or("日主", |g| g.name());
        let hidden: Vec<&str> = p.hidden_stems.iter().map(|s| s.name()).collect();
        println!(
            "{label}  {}{}   {}{}   {god}  {}",
            p.stem_branch.stem,
            p.stem_element,
            p.stem_branch.branch,
            p.branch_element,
            hidden.join("")
        );
    }
    let e = &chart.elements;
    println!(
        "五行: 木{} 火{} 土{} 金{} 水{}",
        e.wood, e.fire, e.earth, e.metal, e.water
    );
    let spirits: Vec<&str> = chart.spirits.iter().map(|s| s.name()).collect();
    if !spirits.is_empty() {
        println!("神煞: {}", spirits.join(" "));
    }
    println!("旺衰: {} ({:.1})", strength.level, strength.score);
    println!("{}", strength.analysis);
}

pub fn ziwei(chart: &PurpleStarChart) {
    println!(
        "命宫: {}  身宫: {}",
        chart.life_palace_branch(),
        chart.palaces[chart.body_palace as usize].branch
    );
    for p in &chart.palaces {
        println!("  {}", p.summary);
    }
    println!("大限:");
    for period in &chart.major_periods {
        println!(
            "  {:>3}-{:<3} {} {} [{}] {}",
            period.start_age,
            period.end_age,
            period.branch,
            period.palace,
            period.fortune.name(),
            period.stars.join(" ")
        );
    }
}

fn domain(label: &str, d: &DomainScore) {
    println!("{label}: {}", d.score);
    println!("  {}", d.analysis);
    println!("  {}", d.advice);
    for c in &d.cautions {
        println!("  ! {c}");
    }
    if !d.lucky.is_empty() {
        println!("  宜: {}", d.lucky.join(" "));
    }
}

pub fn fortune(f: &FortuneScore) {
    println!("综合: {}", f.overall);
    domain("事业", &f.career);
    domain("财富", &f.wealth);
    domain("感情", &f.love);
    domain("健康", &f.health);
}

pub fn daily(d: &DailyFortune) {
    println!(
        "{} {} ({})  运势 {} {}",
        d.date, d.day_pillar, d.day_element, d.luck_score, d.level
    );
    println!(
        "幸运: {} {} {}",
        d.lucky.color, d.lucky.direction, d.lucky.number
    );
    println!("宜: {}", d.suitable.join(" "));
    println!("忌: {}", d.avoid.join(" "));
    for h in &d.hourly {
        println!("  {} {} {}", h.branch, h.time_range, h.luck);
    }
}

pub fn report(r: &DestinyReport) {
    println!("{} ({})", r.birth.name, r.birth.gender.name());
    sexagenary(&r.sexagenary);
    println!();
    bazi(&r.bazi, &r.strength);
    let fav: Vec<&str> = r.favorable.favorable.iter().map(|e| e.name()).collect();
    let unfav: Vec<&str> = r.favorable.unfavorable.iter().map(|e| e.name()).collect();
    println!("喜用: {}  忌: {}", fav.join(""), unfav.join(""));
    println!();
    ziwei(&r.ziwei);
    println!();
    fortune(&r.fortune);
}
