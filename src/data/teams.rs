use crate::models::Team;
use crate::types::TeamId;

/// Teams carry no city or conference data yet; those fields are empty strings.
const fn team(
    id: u32,
    name: &'static str,
    short_name: &'static str,
    logo_url: &'static str,
    arena_name: &'static str,
) -> Team {
    Team {
        id: TeamId::new(id),
        name,
        short_name,
        city: "",
        state: "",
        conference: "",
        division: "",
        logo_url,
        arena_name,
    }
}

pub static TEAMS: &[Team] = &[
    team(1, "Atlanta Hawks", "Atl", "/teams/atl.svg", "Arena 1"),
    team(2, "Boston Celtics", "Bos", "/teams/bos.svg", "Arena 2"),
    team(3, "Brooklyn Nets", "Bro", "/teams/bro.svg", "Arena 3"),
    team(4, "Charlotte Hornets", "Cha", "/teams/cha.svg", "Arena 4"),
    team(5, "Chicago Bulls", "Chi", "/teams/chi.svg", "Arena 5"),
    team(6, "Cleveland Cavaliers", "Cle", "/teams/cle.svg", "Arena 6"),
    team(7, "Dallas Mavericks", "Dal", "/teams/dal.svg", "Arena 7"),
    team(8, "Denver Nuggets", "Den", "/teams/den.svg", "Arena 8"),
    team(9, "Detroit Pistons", "Det", "/teams/det.svg", "Arena 9"),
    team(10, "Golden State Warriors", "Gol", "/teams/gol.svg", "Arena 10"),
    team(11, "France", "Fra", "/teams/fra.svg", "Arena 11"),
    team(12, "Latvia", "Lat", "/teams/lat.svg", "Arena 12"),
    team(13, "Serbia", "Ser", "/teams/ser.svg", "Arena 13"),
    team(14, "Lithuania", "Lit", "/teams/lit.svg", "Arena 14"),
    team(15, "Spain", "Spa", "/teams/spa.svg", "Arena 15"),
    team(16, "Germany", "Ger", "/teams/ger.svg", "Arena 16"),
    team(17, "Italy", "Ita", "/teams/ita.svg", "Arena 17"),
    team(18, "Greece", "Gre", "/teams/gre.svg", "Arena 18"),
    team(19, "Turkey", "Tur", "/teams/tur.svg", "Arena 19"),
    team(20, "Finland", "Fin", "/teams/fin.svg", "Arena 20"),
    team(21, "Guangdong Southern Tigers", "Gua", "/teams/gua.png", "Arena 21"),
    team(22, "Beijing Ducks", "Bei", "/teams/bei.png", "Arena 22"),
    team(23, "Xinjiang Flying Tigers", "Xin", "/teams/xin.png", "Arena 23"),
    team(24, "Zhejiang Lions", "Zhe", "/teams/zhe.png", "Arena 24"),
    team(25, "Liaoning Flying Leopards", "Lia", "/teams/lia.png", "Arena 25"),
    team(26, "Shanghai Sharks", "Sha", "/teams/sha.png", "Arena 26"),
    team(27, "Shenzhen Leopards", "She", "/teams/she.svg", "Arena 27"),
    team(28, "Fujian Sturgeons", "Fuj", "/teams/fuj.png", "Arena 28"),
    team(29, "Shandong Heroes", "Sha", "/teams/shan.png", "Arena 29"),
    team(30, "Qingdao Eagles", "Qin", "/teams/qin.svg", "Arena 30"),
    team(31, "Sydney Kings", "Syd", "/teams/syd.svg", "Arena 31"),
    team(32, "Melbourne United", "Mel", "/teams/mel.png", "Arena 32"),
    team(33, "Perth Wildcats", "Per", "/teams/per.png", "Arena 33"),
    team(34, "Brisbane Bullets", "Bri", "/teams/bri.svg", "Arena 34"),
    team(35, "Adelaide 36ers", "Ade", "/teams/ade.svg", "Arena 35"),
    team(36, "Cairns Taipans", "Cai", "/teams/cai.svg", "Arena 36"),
    team(37, "Tasmania JackJumpers", "Tas", "/teams/tas.svg", "Arena 37"),
    team(38, "South East Melbourne Phoenix", "Sou", "/teams/sou.png", "Arena 38"),
    team(39, "Illawarra Hawks", "Ill", "/teams/ill.png", "Arena 39"),
    team(40, "New Zealand Breakers", "New", "/teams/nz.png", "Arena 40"),
    team(41, "Real Madrid", "Rea", "/teams/rmb.svg", "Arena 41"),
    team(42, "Barça", "Bar", "/teams/fcb.svg", "Arena 42"),
    team(43, "Valencia Basket", "Val", "/teams/val.png", "Arena 43"),
    team(44, "Baskonia", "Bas", "/teams/bask.png", "Arena 44"),
    team(45, "Unicaja Málaga", "Uni", "/teams/uni.png", "Arena 45"),
    team(46, "CB Canarias", "CB ", "/teams/cbc.png", "Arena 46"),
    team(47, "CB Gran Canaria", "CB ", "/teams/cbg.svg", "Arena 47"),
    team(48, "Joventut Badalona", "Jov", "/teams/jov.png", "Arena 48"),
    team(49, "UCAM Murcia", "UCA", "/teams/ucam.svg", "Arena 49"),
    team(50, "Surne Bilbao Basket", "Sur", "/teams/sur.svg", "Arena 50"),
];
