use crate::project::ProjectVisual;

pub(crate) static ZIGZAG: &[ProjectVisual] = &[
    ProjectVisual {
        src: "/work/zigzag/01-shooting-guide.jpg",
        title: "촬영 가이드 & 콘셉트 메모",
        caption: "런칭 타깃, 포즈, 소품, 조명까지 정의한 사전 기획 문서. 촬영팀과 공유한 기준점입니다.",
    },
    ProjectVisual {
        src: "/work/zigzag/02-overview-kv.jpg",
        title: "런칭 키 비주얼",
        caption: "지그재그 패션 카테고리 런칭을 위해 제작한 시즌 키 비주얼.",
    },
    ProjectVisual {
        src: "/work/zigzag/03-brand-mood.png",
        title: "브랜드 무드 & 톤",
        caption: "Femininity·Lovely·Confident 키워드를 시각 언어로 정리한 브랜드 무드보드.",
    },
    ProjectVisual {
        src: "/work/zigzag/04-detail-hoodie.png",
        title: "후드 티 상세 페이지 구조",
        caption: "컬러, 핏, 스타일링 포인트를 한 흐름으로 배치한 후드 티셔츠 상세 모듈.",
    },
    ProjectVisual {
        src: "/work/zigzag/05-detail-denim-skirt.png",
        title: "데님 스커트 스토리텔링 상세",
        caption: "추천 카피, 플라워 비주얼, 착장 컷을 결합해 설득력을 높인 상세 페이지.",
    },
    ProjectVisual {
        src: "/work/zigzag/06-detail-training-pants.png",
        title: "트레이닝 팬츠 정보 모듈",
        caption: "핏·활동감 이미지와 Comment/Notice 모듈을 분리해 정보 탐색성을 높였습니다.",
    },
];

pub(crate) static GMARKET: &[ProjectVisual] = &[
    ProjectVisual {
        src: "/work/gmarket/01-top-page.jpg",
        title: "라쿠텐 상위 카테고리 레이아웃",
        caption: "일본 고객이 익숙한 가격·쿠폰·혜택 순서를 기준으로 재배치한 리스트.",
    },
    ProjectVisual {
        src: "/work/gmarket/02-campaign.jpg",
        title: "기획전 배너 & 캠페인",
        caption: "시즌 프로모션용 배너와 랜딩 조합.",
    },
    ProjectVisual {
        src: "/work/gmarket/03-seo-structure.jpg",
        title: "SEO 구조 샘플",
        caption: "타이틀·설명·키워드 블록 구조 예시.",
    },
];

pub(crate) static TRAVEL: &[ProjectVisual] = &[
    ProjectVisual {
        src: "/work/travel/01-brand-core.jpg",
        title: "브랜드 코어 정리",
        caption: "‘어떤 여행을 제안하는가’를 한 페이지로 정리한 코어 슬라이드.",
    },
    ProjectVisual {
        src: "/work/travel/02-web-wireframe.png",
        title: "호텔·체험 IA & 와이어",
        caption: "여정 단계별로 나눈 IA와 와이어 시안.",
    },
    ProjectVisual {
        src: "/work/travel/03-feed-system.jpg",
        title: "인스타 피드 카드 시스템",
        caption: "피드·슬라이드·배너에 공통 적용한 타이포/레이아웃 규칙.",
    },
];
