use std::sync::LazyLock;

use chrono::NaiveDate;

use super::models::{Player, Tournament};

struct Event {
    name: &'static str,
    date: NaiveDate,
    tier: u32,
}

const fn tier_one(name: &'static str, year: i32, month: u32, day: u32) -> Event {
    let date = match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid tournament date"),
    };
    Event { name, date, tier: 1 }
}

const DREAMLEAGUE_S24: Event = tier_one("DreamLeague Season 24", 2025, 3, 15);
const DREAMLEAGUE_S25: Event = tier_one("DreamLeague Season 25", 2025, 9, 12);
const ESL_BERLIN: Event = tier_one("ESL One Berlin 2025", 2025, 5, 20);
const ESL_BIRMINGHAM: Event = tier_one("ESL One Birmingham 2025", 2025, 6, 5);
const ESL_MANILA: Event = tier_one("ESL One Manila 2025", 2025, 4, 18);
const PGL_WALLACHIA_S2: Event = tier_one("PGL Wallachia Season 2", 2025, 7, 10);
const PGL_COPENHAGEN: Event = tier_one("PGL Copenhagen Major 2025", 2025, 2, 10);
const TI_2025: Event = tier_one("The International 2025", 2025, 8, 25);
const WEPLAY_ANIMAJOR: Event = tier_one("WePlay Animajor 2025", 2025, 10, 5);

const ASTER: &str = "Team Aster";
const LGD: &str = "LGD Gaming";
const XTREME: &str = "Xtreme Gaming";
const EHOME: &str = "EHOME";
const IG: &str = "Invictus Gaming";

/// Built on first access and never mutated afterwards.
pub(super) static ROSTER: LazyLock<Vec<Player>> = LazyLock::new(|| {
    vec![
        player("1", "Ame", "Wang Chunyu", ASTER, &[&DREAMLEAGUE_S24, &ESL_BERLIN]),
        player("2", "Chalice", "Yang Shenyi", ASTER, &[&DREAMLEAGUE_S24, &ESL_BERLIN]),
        player("3", "XinQ", "Zeng Xinquan", ASTER, &[&DREAMLEAGUE_S24, &PGL_WALLACHIA_S2]),
        player("4", "Lou", "Lou Yun", ASTER, &[&DREAMLEAGUE_S24]),
        player("5", "BoBoKa", "Liu Yaqi", ASTER, &[&DREAMLEAGUE_S24]),
        player("6", "old chicken", "Zhang Bin", LGD, &[&TI_2025, &ESL_BIRMINGHAM]),
        player("7", "NothingToSay", "Cheng Jin Xiang", LGD, &[&TI_2025, &ESL_BIRMINGHAM]),
        player("8", "Faith_bian", "Zhang Ruida", LGD, &[&TI_2025]),
        player("9", "y`", "Zhang Yiping", LGD, &[&TI_2025]),
        player("10", "XM", "Xu Minghao", LGD, &[&ESL_BIRMINGHAM]),
        player("11", "Paparazi", "Lu Zhigang", XTREME, &[&TI_2025, &DREAMLEAGUE_S25]),
        player("12", "Pyw", "Jiang Yongyang", XTREME, &[&TI_2025]),
        player("13", "JT", "Jiang Tao", XTREME, &[&TI_2025]),
        player("14", "Dy", "Ding Yi", XTREME, &[&DREAMLEAGUE_S25]),
        player("15", "Super", "Xie Junhao", EHOME, &[&ESL_MANILA]),
        player("16", "Erica", "Zhong Tianzhe", EHOME, &[&ESL_MANILA]),
        player("17", "old eLeVeN", "Ren Yangwei", IG, &[&PGL_COPENHAGEN]),
        player("18", "Emo", "Wen Zheng", IG, &[&PGL_COPENHAGEN, &WEPLAY_ANIMAJOR]),
        player("19", "JiuZhang", "Wang Jiuzhang", IG, &[&WEPLAY_ANIMAJOR]),
        player("20", "Oli", "Lin Kai", IG, &[&PGL_COPENHAGEN]),
    ]
});

fn player(id: &str, name: &str, real_name: &str, team: &str, events: &[&Event]) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        real_name: real_name.to_string(),
        team: team.to_string(),
        tournaments: events.iter().map(|event| to_tournament(event)).collect(),
    }
}

fn to_tournament(event: &Event) -> Tournament {
    Tournament {
        name: event.name.to_string(),
        date: event.date,
        tier: event.tier,
    }
}
