//! GraphQL operation documents
//!
//! Query/mutation text for each knowledge-base collection. Field selections
//! mirror what the backend schema exposes; the navigation list query pulls
//! the server-nested tree three levels deep, which the core flattens and
//! rebuilds locally.

use kb_core::ports::EntityKind;

pub(crate) struct EntityMeta {
    /// PascalCase singular, used in operation and input type names.
    pub pascal: &'static str,
    /// Field the list query responds under.
    pub list_field: &'static str,
    /// Field the by-id query responds under.
    pub get_field: &'static str,
    /// Selection set for one record.
    pub fields: &'static str,
}

const HERO_FIELDS: &str = "_id name alias role type speciality region hero_order \
short_description avatar image release_date durability offense control_effect difficulty";

const SKILL_FIELDS: &str =
    "_id name type tag skill_icon lite_description full_description heroName";

const ITEM_FIELDS: &str =
    "_id name type tag attributes price image story description tips parent_items";

const EMBLEM_FIELDS: &str = "_id name type icon attributes benefit description cooldown";

const BATTLE_SPELL_FIELDS: &str = "_id name tag icon description cooldown";

const NAVIGATION_ITEM_FIELDS: &str =
    "_id name parent_id icon route is_header is_active order roles level is_visible";

const TOURNAMENT_FIELDS: &str = "_id name slug tier tierLevel region liquipediaUrl \
liquipediaSlug status syncStatus lastSyncedAt prizePool createdAt";

static HERO_META: EntityMeta = EntityMeta {
    pascal: "Hero",
    list_field: "heroes",
    get_field: "hero",
    fields: HERO_FIELDS,
};
static SKILL_META: EntityMeta = EntityMeta {
    pascal: "Skill",
    list_field: "skills",
    get_field: "skill",
    fields: SKILL_FIELDS,
};
static ITEM_META: EntityMeta = EntityMeta {
    pascal: "Item",
    list_field: "items",
    get_field: "item",
    fields: ITEM_FIELDS,
};
static EMBLEM_META: EntityMeta = EntityMeta {
    pascal: "Emblem",
    list_field: "emblems",
    get_field: "emblem",
    fields: EMBLEM_FIELDS,
};
static BATTLE_SPELL_META: EntityMeta = EntityMeta {
    pascal: "BattleSpell",
    list_field: "battleSpells",
    get_field: "battleSpell",
    fields: BATTLE_SPELL_FIELDS,
};
static NAVIGATION_META: EntityMeta = EntityMeta {
    pascal: "Navigation",
    list_field: "getNavigationTree",
    get_field: "getNavigation",
    fields: NAVIGATION_ITEM_FIELDS,
};
static TOURNAMENT_META: EntityMeta = EntityMeta {
    pascal: "Tournament",
    list_field: "tournaments",
    get_field: "tournament",
    fields: TOURNAMENT_FIELDS,
};

pub(crate) fn meta(kind: EntityKind) -> &'static EntityMeta {
    match kind {
        EntityKind::Hero => &HERO_META,
        EntityKind::Skill => &SKILL_META,
        EntityKind::Item => &ITEM_META,
        EntityKind::Emblem => &EMBLEM_META,
        EntityKind::BattleSpell => &BATTLE_SPELL_META,
        EntityKind::Navigation => &NAVIGATION_META,
        EntityKind::Tournament => &TOURNAMENT_META,
    }
}

pub(crate) fn list_query(kind: EntityKind) -> String {
    let m = meta(kind);
    if kind == EntityKind::Navigation {
        // Nested to the depth the renderer consumes.
        let f = m.fields;
        return format!(
            "query GetNavigationTree {{ getNavigationTree {{ {f} children {{ {f} children {{ {f} }} }} }} }}"
        );
    }
    format!(
        "query Get{pascal}List {{ {field} {{ {fields} }} }}",
        pascal = m.pascal,
        field = m.list_field,
        fields = m.fields
    )
}

pub(crate) fn get_query(kind: EntityKind) -> String {
    let m = meta(kind);
    format!(
        "query Get{pascal}($id: ID!) {{ {field}(id: $id) {{ {fields} }} }}",
        pascal = m.pascal,
        field = m.get_field,
        fields = m.fields
    )
}

pub(crate) fn create_mutation(kind: EntityKind) -> String {
    let m = meta(kind);
    format!(
        "mutation Create{p}($input: {p}Input!) {{ create{p}(create{p}Input: $input) {{ {fields} }} }}",
        p = m.pascal,
        fields = m.fields
    )
}

pub(crate) fn update_mutation(kind: EntityKind) -> String {
    let m = meta(kind);
    format!(
        "mutation Update{p}($input: Update{p}Input!) {{ update{p}(update{p}Input: $input) {{ {fields} }} }}",
        p = m.pascal,
        fields = m.fields
    )
}

pub(crate) fn delete_mutation(kind: EntityKind) -> String {
    let m = meta(kind);
    format!(
        "mutation Delete{p}($id: ID!) {{ delete{p}(id: $id) {{ _id }} }}",
        p = m.pascal
    )
}

// Auth operations

pub(crate) const LOGIN: &str = "mutation Login($email: String!, $password: String!) { \
login(loginInput: { email: $email, password: $password }) { \
access_token user { _id name email role } } }";

pub(crate) const REGISTER: &str =
    "mutation RegisterUser($email: String!, $name: String!, $password: String!) { \
register(registerInput: { email: $email, name: $name, password: $password }) { \
access_token user { _id name email role } } }";

pub(crate) const LOGOUT: &str = "mutation Logout { logout { message } }";

// Skill detail tables

pub(crate) const GET_SKILLS_DETAIL: &str = "query GetSkillsDetail { \
skills { _id name skills_detail { _id level attributes } } }";

pub(crate) const ADD_SKILL_DETAILS: &str =
    "mutation AddSkillDetailToSkill($skillId: ID!, $input: [CreateSkillDetailInput!]!) { \
addSkillDetailToSkill(skillId: $skillId, input: $input) { _id level attributes } }";

pub(crate) const UPDATE_SKILL_DETAIL: &str =
    "mutation UpdateSkillDetailToSkill($skillId: ID!, $skillDetailId: ID!, $input: UpdateSkillDetailInput!) { \
updateSkillDetailToSkill(skillId: $skillId, skillDetailId: $skillDetailId, input: $input) { \
_id level attributes } }";

// Tournament tracking extras

pub(crate) const SYNC_TOURNAMENT: &str = "mutation SyncTournament($id: ID!) { \
syncTournament(id: $id) { success message itemsSynced errors } }";

pub(crate) const GET_STAGES: &str = "query GetStages($tournamentId: ID!) { \
tournamentStages(tournamentId: $tournamentId) { _id name slug liquipediaUrl order } }";

pub(crate) const GET_HERO_STATS: &str = "query GetHeroStats($stageId: ID!) { \
heroStats(stageId: $stageId) { heroName heroImageUrl picks bans wins losses \
winRate pickRate banRate presenceRate stageId } }";
