use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_FLEET: &str = "main_menu.fleet";
    pub const MAIN_MENU_TIMING: &str = "main_menu.timing";
    pub const MAIN_MENU_WAREHOUSE: &str = "main_menu.warehouse";
    pub const MAIN_MENU_PRESETS: &str = "main_menu.presets";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const FLEET_HEADING: &str = "fleet.heading";
    pub const PROMPT_REGION: &str = "prompt.region";
    pub const PROMPT_SECTOR: &str = "prompt.sector";
    pub const PROMPT_SCENARIO: &str = "prompt.scenario";
    pub const RESULT_DEMAND_INCREASE: &str = "result.demand_increase";
    pub const RESULT_NO_GROWTH: &str = "result.no_growth";
    pub const RESULT_RECOMMENDED: &str = "result.recommended";
    pub const RESULT_BASE_COST: &str = "result.base_cost";
    pub const RESULT_ADJUSTED_COST: &str = "result.adjusted_cost";
    pub const RESULT_PAYBACK: &str = "result.payback";
    pub const RESULT_PAYBACK_NEVER: &str = "result.payback_never";
    pub const RESULT_RISK: &str = "result.risk";
    pub const RESULT_RELIABILITY_LOSS: &str = "result.reliability_loss";
    pub const RESULT_ADVISORIES: &str = "result.advisories";

    pub const TIMING_HEADING: &str = "timing.heading";
    pub const PROMPT_CURRENT_INFLATION: &str = "prompt.current_inflation";
    pub const PROMPT_ESTIMATED_INFLATION: &str = "prompt.estimated_inflation";
    pub const PROMPT_FX_RATE: &str = "prompt.fx_rate";
    pub const PROMPT_BASE_PRICE: &str = "prompt.base_price";
    pub const RESULT_COST_NOW: &str = "result.cost_now";
    pub const RESULT_COST_LATER: &str = "result.cost_later";
    pub const RESULT_DIFFERENCE: &str = "result.difference";
    pub const RESULT_DECISION: &str = "result.decision";
    pub const DECISION_BUY_NOW: &str = "decision.buy_now";
    pub const DECISION_PARTIAL: &str = "decision.partial";
    pub const DECISION_WAIT: &str = "decision.wait";
    pub const RISK_LOW: &str = "risk.low";
    pub const RISK_MEDIUM: &str = "risk.medium";
    pub const RISK_HIGH: &str = "risk.high";

    pub const WAREHOUSE_HEADING: &str = "warehouse.heading";
    pub const PROMPT_DEPOT: &str = "prompt.depot";
    pub const PROMPT_ADDITIONAL_CAPACITY: &str = "prompt.additional_capacity";
    pub const PROMPT_END_YEAR: &str = "prompt.end_year";
    pub const RESULT_GROWTH_RATE: &str = "result.growth_rate";
    pub const RESULT_SATURATION_YEAR: &str = "result.saturation_year";
    pub const RESULT_NO_SATURATION: &str = "result.no_saturation";
    pub const RESULT_YEARS_GAINED: &str = "result.years_gained";
    pub const OUTLOOK_SATURATION_AHEAD: &str = "outlook.saturation_ahead";
    pub const OUTLOOK_COMFORTABLE: &str = "outlook.comfortable";
    pub const OUTLOOK_EXPANSION_RESOLVES: &str = "outlook.expansion_resolves";
    pub const OUTLOOK_EXPANSION_STRONG: &str = "outlook.expansion_strong";
    pub const OUTLOOK_EXPANSION_MODERATE: &str = "outlook.expansion_moderate";
    pub const OUTLOOK_EXPANSION_INSUFFICIENT: &str = "outlook.expansion_insufficient";

    pub const PRESETS_HEADING: &str = "presets.heading";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const PROMPT_INFLATION_FRACTION: &str = "prompt.inflation_fraction";
    pub const PROMPT_INTEREST_FRACTION: &str = "prompt.interest_fraction";

    pub const SEVERITY_INFO: &str = "severity.info";
    pub const SEVERITY_WARNING: &str = "severity.warning";
    pub const SEVERITY_SUCCESS: &str = "severity.success";

    pub const ADVICE_HEAVY_TRACTOR: &str = "advice.heavy_tractor";
    pub const ADVICE_MARMARA_FRIGO: &str = "advice.marmara_frigo";
    pub const ADVICE_MARKET_GAP: &str = "advice.market_gap";
    pub const ADVICE_KIRKAYAK: &str = "advice.kirkayak";
    pub const ADVICE_UNRELIABLE_BRAND: &str = "advice.unreliable_brand";
    pub const ADVICE_STANDARD_TRACTOR: &str = "advice.standard_tractor";
    pub const ADVICE_NO_GROWTH_SIGNAL: &str = "advice.no_growth_signal";
    pub const ADVICE_PAYBACK_NEVER: &str = "advice.payback_never";
    pub const ADVICE_HIGH_RISK: &str = "advice.high_risk";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
    Tr,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else if c.starts_with("tr") {
            Language::Tr
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Tr => "tr",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new("ko")
    }
}

impl Translator {
    /// 언어 코드(ko/en/tr)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: built_in_pack(lang_code),
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key).map(String::as_str))
    }

    /// 번역을 가져온다. 언어팩 → 내장 영어(en/tr) → 한국어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        match self.lang {
            Language::En | Language::Tr => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }

    /// `{name}` 자리표시자를 값으로 바꾼 번역을 만든다.
    pub fn format(&self, key: &str, args: &[(&str, String)]) -> String {
        args.iter()
            .fold(self.t(key).to_string(), |acc, (name, value)| {
                acc.replace(&format!("{{{name}}}"), value)
            })
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("tr") => Some("tr".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    normalize_lang(&lang)
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LC_ALL", "LANG"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫/중첩 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., tr-tr)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., tr)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

/// TOML 언어팩을 "섹션.키" 형태의 평면 맵으로 바꾼다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "tr-tr" | "tr" => parse_toml_to_map(include_str!("../locales/tr-tr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Fleet Planning Toolbox ===",
        MAIN_MENU_FLEET => "1) 차량 투자 시뮬레이션",
        MAIN_MENU_TIMING => "2) 구매 시점 판단",
        MAIN_MENU_WAREHOUSE => "3) 창고 용량 예측",
        MAIN_MENU_PRESETS => "4) 시나리오 프리셋 보기",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        FLEET_HEADING => "\n-- 차량 투자 시뮬레이션 --",
        PROMPT_REGION => "지역 (예: Marmara, Ege, İç Anadolu): ",
        PROMPT_SECTOR => "섹터 (Heavy, Food/Fruit, Standard, Industrial): ",
        PROMPT_SCENARIO => "시나리오 (optimistic, base, pessimistic, custom): ",
        RESULT_DEMAND_INCREASE => "수요 증가율:",
        RESULT_NO_GROWTH => "성장 신호 없음",
        RESULT_RECOMMENDED => "추천 추가 장비:",
        RESULT_BASE_COST => "취득비:",
        RESULT_ADJUSTED_COST => "시나리오 반영 취득비:",
        RESULT_PAYBACK => "회수 기간(개월):",
        RESULT_PAYBACK_NEVER => "회수 불가",
        RESULT_RISK => "위험 등급:",
        RESULT_RELIABILITY_LOSS => "연간 고장 손실 추정:",
        RESULT_ADVISORIES => "권고 사항:",
        TIMING_HEADING => "\n-- 구매 시점 판단 --",
        PROMPT_CURRENT_INFLATION => "현재 인플레이션 [%]: ",
        PROMPT_ESTIMATED_INFLATION => "예상 인플레이션 [%]: ",
        PROMPT_FX_RATE => "환율 (TRY/USD): ",
        PROMPT_BASE_PRICE => "기준 가격: ",
        RESULT_COST_NOW => "지금 구매 비용:",
        RESULT_COST_LATER => "나중 구매 비용:",
        RESULT_DIFFERENCE => "비용 차이 [%]:",
        RESULT_DECISION => "판단:",
        DECISION_BUY_NOW => "지금 구매",
        DECISION_PARTIAL => "일부 구매",
        DECISION_WAIT => "대기",
        RISK_LOW => "낮음",
        RISK_MEDIUM => "보통",
        RISK_HIGH => "높음",
        WAREHOUSE_HEADING => "\n-- 창고 용량 예측 --",
        PROMPT_DEPOT => "창고 이름: ",
        PROMPT_ADDITIONAL_CAPACITY => "증설 면적 [m²] (없으면 0): ",
        PROMPT_END_YEAR => "예측 종료 연도: ",
        RESULT_GROWTH_RATE => "연 성장률(CAGR):",
        RESULT_SATURATION_YEAR => "포화 연도:",
        RESULT_NO_SATURATION => "기간 내 포화 없음",
        RESULT_YEARS_GAINED => "증설로 늦춰진 연수:",
        OUTLOOK_SATURATION_AHEAD => "증설 없이 예측 기간 내 포화가 예상됩니다.",
        OUTLOOK_COMFORTABLE => "예측 기간 내 용량 여유가 있습니다.",
        OUTLOOK_EXPANSION_RESOLVES => "증설로 예측 기간 내 포화가 해소됩니다.",
        OUTLOOK_EXPANSION_STRONG => "증설로 포화 시점이 5년 이상 늦춰집니다.",
        OUTLOOK_EXPANSION_MODERATE => "증설로 포화 시점이 2~4년 늦춰집니다.",
        OUTLOOK_EXPANSION_INSUFFICIENT => "증설 규모가 부족합니다(2년 미만 연장).",
        PRESETS_HEADING => "\n-- 시나리오 프리셋 --",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 언어 변경  2) 사용자 정의 시나리오",
        SETTINGS_LANGUAGE_OPTIONS => "1) 한국어  2) English  3) Türkçe",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        PROMPT_INFLATION_FRACTION => "인플레이션(소수, 0.25 = 25%): ",
        PROMPT_INTEREST_FRACTION => "이자율(소수, 0.45 = 45%): ",
        SEVERITY_INFO => "정보",
        SEVERITY_WARNING => "경고",
        SEVERITY_SUCCESS => "양호",
        ADVICE_HEAVY_TRACTOR => "중량물 수요 대응을 위해 6x4 고마력 트랙터 {units}대 구매를 권장합니다.",
        ADVICE_MARMARA_FRIGO => "Marmara는 과일 수송량이 적은 회랑이라 냉장 트레일러 비중을 낮췄습니다.",
        ADVICE_MARKET_GAP => "냉장 트레일러 시장 부족분({gap}대) 중 {added}대를 추가로 메웁니다.",
        ADVICE_KIRKAYAK => "청과 시장(hal) 물류용 kırkayak {units}대를 권장합니다.",
        ADVICE_UNRELIABLE_BRAND => "{brand} 브랜드는 고장률이 가장 높습니다({rate}%). 신규 구매 시 주의하세요.",
        ADVICE_STANDARD_TRACTOR => "표준 화물용 4x2 500마력 트랙터 {units}대를 권장합니다.",
        ADVICE_NO_GROWTH_SIGNAL => "과거 수요 기준값이 0이라 성장 신호를 계산할 수 없습니다.",
        ADVICE_PAYBACK_NEVER => "현재 시나리오에서는 투자비가 회수되지 않습니다.",
        ADVICE_HIGH_RISK => "시나리오 위험 점수가 높습니다({score}점). 투자를 재검토하세요.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Fleet Planning Toolbox ===",
        MAIN_MENU_FLEET => "1) Fleet investment simulation",
        MAIN_MENU_TIMING => "2) Purchase timing",
        MAIN_MENU_WAREHOUSE => "3) Warehouse capacity projection",
        MAIN_MENU_PRESETS => "4) Scenario presets",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        FLEET_HEADING => "\n-- Fleet Investment Simulation --",
        PROMPT_REGION => "Region (e.g. Marmara, Ege, İç Anadolu): ",
        PROMPT_SECTOR => "Sector (Heavy, Food/Fruit, Standard, Industrial): ",
        PROMPT_SCENARIO => "Scenario (optimistic, base, pessimistic, custom): ",
        RESULT_DEMAND_INCREASE => "Demand increase:",
        RESULT_NO_GROWTH => "no growth signal",
        RESULT_RECOMMENDED => "Recommended additions:",
        RESULT_BASE_COST => "Acquisition cost:",
        RESULT_ADJUSTED_COST => "Scenario-adjusted cost:",
        RESULT_PAYBACK => "Payback (months):",
        RESULT_PAYBACK_NEVER => "never",
        RESULT_RISK => "Risk level:",
        RESULT_RELIABILITY_LOSS => "Estimated annual breakdown loss:",
        RESULT_ADVISORIES => "Advisories:",
        TIMING_HEADING => "\n-- Purchase Timing --",
        PROMPT_CURRENT_INFLATION => "Current inflation [%]: ",
        PROMPT_ESTIMATED_INFLATION => "Estimated inflation [%]: ",
        PROMPT_FX_RATE => "FX rate (TRY/USD): ",
        PROMPT_BASE_PRICE => "Base price: ",
        RESULT_COST_NOW => "Cost if bought now:",
        RESULT_COST_LATER => "Cost if bought later:",
        RESULT_DIFFERENCE => "Difference [%]:",
        RESULT_DECISION => "Decision:",
        DECISION_BUY_NOW => "buy now",
        DECISION_PARTIAL => "partial purchase",
        DECISION_WAIT => "wait",
        RISK_LOW => "low",
        RISK_MEDIUM => "medium",
        RISK_HIGH => "high",
        WAREHOUSE_HEADING => "\n-- Warehouse Capacity Projection --",
        PROMPT_DEPOT => "Depot name: ",
        PROMPT_ADDITIONAL_CAPACITY => "Additional capacity [m²] (0 if none): ",
        PROMPT_END_YEAR => "Projection end year: ",
        RESULT_GROWTH_RATE => "Annual growth (CAGR):",
        RESULT_SATURATION_YEAR => "Saturation year:",
        RESULT_NO_SATURATION => "no saturation within horizon",
        RESULT_YEARS_GAINED => "Years gained by expansion:",
        OUTLOOK_SATURATION_AHEAD => "Saturation is expected within the horizon without expansion.",
        OUTLOOK_COMFORTABLE => "Capacity is sufficient within the horizon.",
        OUTLOOK_EXPANSION_RESOLVES => "The expansion removes saturation within the horizon.",
        OUTLOOK_EXPANSION_STRONG => "The expansion delays saturation by 5 years or more.",
        OUTLOOK_EXPANSION_MODERATE => "The expansion delays saturation by 2-4 years.",
        OUTLOOK_EXPANSION_INSUFFICIENT => "The expansion is insufficient (less than 2 years gained).",
        PRESETS_HEADING => "\n-- Scenario Presets --",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) Change language  2) Custom scenario",
        SETTINGS_LANGUAGE_OPTIONS => "1) 한국어  2) English  3) Türkçe",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        PROMPT_INFLATION_FRACTION => "Inflation (fraction, 0.25 = 25%): ",
        PROMPT_INTEREST_FRACTION => "Interest (fraction, 0.45 = 45%): ",
        SEVERITY_INFO => "info",
        SEVERITY_WARNING => "warning",
        SEVERITY_SUCCESS => "success",
        ADVICE_HEAVY_TRACTOR => "Buy {units} 6x4 high-hp tractors for heavy-load demand.",
        ADVICE_MARMARA_FRIGO => "Marmara is a low fruit-traffic corridor; frigo share was reduced.",
        ADVICE_MARKET_GAP => "Closes {added} units of the {gap}-unit refrigerated trailer market gap.",
        ADVICE_KIRKAYAK => "{units} kırkayak tractors recommended for produce market (hal) logistics.",
        ADVICE_UNRELIABLE_BRAND => "{brand} has the highest breakdown rate ({rate}%); review before buying.",
        ADVICE_STANDARD_TRACTOR => "{units} 4x2 500hp tractors recommended for standard cargo.",
        ADVICE_NO_GROWTH_SIGNAL => "Historical demand baseline is zero; no growth signal available.",
        ADVICE_PAYBACK_NEVER => "The investment does not pay back under this scenario.",
        ADVICE_HIGH_RISK => "Scenario risk score is high ({score} points); reconsider the investment.",
        _ => return None,
    })
}
